//! Output formatter trait

use conductor_domain::{OrchestrationReport, OutputFormat};

/// Trait for formatting orchestration reports
pub trait OutputFormatter {
    /// Plan, per-agent results and the final answer
    fn format_full(&self, report: &OrchestrationReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &OrchestrationReport) -> String;

    /// The final answer only
    fn format_answer(&self, report: &OrchestrationReport) -> String;

    /// Dispatch on the selected [`OutputFormat`]
    fn render(&self, report: &OrchestrationReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Answer => self.format_answer(report),
            OutputFormat::Full => self.format_full(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
