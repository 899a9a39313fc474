//! Console output formatter for orchestration reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use conductor_domain::{AgentResult, OrchestrationReport};

/// Formats orchestration reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report: request, plan, specialist results, answer
    pub fn format_full(report: &OrchestrationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Agent Conductor"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Request:".cyan().bold(),
            report.request
        ));
        if let Some(refined) = &report.refined_request
            && refined != &report.request
        {
            output.push_str(&format!("{} {}\n", "Refined:".cyan().bold(), refined));
        }
        output.push('\n');

        output.push_str(&Self::section_header("Plan"));
        match &report.plan {
            Some(plan) => {
                output.push_str(&format!("{} {}\n", "Intent:".bold(), plan.intent));
                if !plan.reason.is_empty() {
                    output.push_str(&format!("{} {}\n", "Reason:".bold(), plan.reason));
                }
            }
            None => output.push_str(&format!("{}\n", "(no plan)".dimmed())),
        }

        if !report.results.is_empty() {
            output.push_str(&Self::section_header("Specialist Results"));
            for result in &report.results {
                output.push_str(&Self::agent_result(result));
            }
        }

        output.push_str(&Self::section_header("Final Answer"));
        let answer = report.answer_text();
        if report.answer.is_success() {
            output.push_str(&format!("\n{}\n", answer));
        } else {
            output.push_str(&format!("\n{}\n", answer.red().bold()));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &OrchestrationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// The final answer only (concise output)
    pub fn format_answer(report: &OrchestrationReport) -> String {
        if report.answer.is_success() {
            report.answer_text().to_string()
        } else {
            report.answer_text().red().bold().to_string()
        }
    }

    fn agent_result(result: &AgentResult) -> String {
        let title = format!(
            "── {} ({} attempt{}) ──",
            result.specialist.display_name(),
            result.attempts,
            if result.attempts == 1 { "" } else { "s" }
        );
        let title = if result.valid {
            title.yellow().bold()
        } else {
            format!("{} [unvalidated]", title).red().bold()
        };
        format!("\n{}\n{}\n", title, result.output)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_full(&self, report: &OrchestrationReport) -> String {
        Self::format_full(report)
    }

    fn format_json(&self, report: &OrchestrationReport) -> String {
        Self::format_json(report)
    }

    fn format_answer(&self, report: &OrchestrationReport) -> String {
        Self::format_answer(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conductor_domain::{FinalAnswer, Intent, OutputFormat, Plan, Specialist};

    fn report() -> OrchestrationReport {
        OrchestrationReport {
            request: "write a sort".to_string(),
            refined_request: Some("Write a sorting function in Rust".to_string()),
            plan: Some(Plan::new(Intent::Code, "needs code")),
            results: vec![AgentResult::validated(
                Specialist::Code,
                "```rust\nfn sort() {}\n```",
                2,
            )],
            answer: FinalAnswer::Answer("Here is the final report.".to_string()),
        }
    }

    #[test]
    fn test_answer_only() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format_answer(&report()),
            "Here is the final report."
        );
    }

    #[test]
    fn test_full_contains_every_section() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_full(&report());
        assert!(output.contains("Request: write a sort"));
        assert!(output.contains("Refined: Write a sorting function in Rust"));
        assert!(output.contains("Intent: CODE"));
        assert!(output.contains("Reason: needs code"));
        assert!(output.contains("(2 attempts)"));
        assert!(output.contains("fn sort()"));
        assert!(output.contains("Here is the final report."));
    }

    #[test]
    fn test_full_for_planning_failure() {
        colored::control::set_override(false);
        let report = OrchestrationReport::failed("hi", FinalAnswer::PlanningFailed);
        let output = ConsoleFormatter::format_full(&report);
        assert!(output.contains("(no plan)"));
        assert!(!output.contains("Specialist Results"));
        assert!(output.contains(FinalAnswer::PlanningFailed.text()));
    }

    #[test]
    fn test_json_is_parseable() {
        let json = ConsoleFormatter.render(&report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["request"], "write a sort");
        assert_eq!(value["answer"]["status"], "answer");
        assert_eq!(value["results"][0]["attempts"], 2);
    }
}
