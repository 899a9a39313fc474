//! Orchestration value objects - immutable result types for one run.
//!
//! - [`AgentTask`] - the work handed to one specialist
//! - [`AgentResult`] - a validated specialist output
//! - [`SynthesisInput`] - everything the synthesis step reads
//! - [`FinalAnswer`] - the single externally visible outcome
//! - [`OrchestrationReport`] - a run summary for display

use crate::orchestration::intent::{Plan, Specialist};
use crate::validation::keywords::KeywordSet;
use serde::{Deserialize, Serialize};

/// User-visible text when planning exhausts its attempts.
pub const PLANNING_FAILED_MESSAGE: &str =
    "Error: Unable to process the request. The planner could not decide how to handle it.";

/// User-visible text when synthesis exhausts its attempts.
pub const SYNTHESIS_FAILED_MESSAGE: &str =
    "Error: The agents could not produce a satisfactory answer. Please try rephrasing your request.";

/// User-visible text for failures nobody anticipated.
pub const UNEXPECTED_FAILURE_MESSAGE: &str =
    "Error: An unexpected error occurred while processing your request.";

/// Work handed to one specialist for one delegation
#[derive(Debug, Clone)]
pub struct AgentTask {
    pub specialist: Specialist,
    pub input: String,
    pub keywords: KeywordSet,
}

impl AgentTask {
    pub fn new(specialist: Specialist, input: impl Into<String>, keywords: KeywordSet) -> Self {
        Self {
            specialist,
            input: input.into(),
            keywords,
        }
    }
}

/// Output of one specialist after validate-and-iterate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResult {
    pub specialist: Specialist,
    pub output: String,
    pub valid: bool,
    /// Producer invocations it took to get here
    pub attempts: u32,
}

impl AgentResult {
    /// A result that passed validation.
    pub fn validated(specialist: Specialist, output: impl Into<String>, attempts: u32) -> Self {
        Self {
            specialist,
            output: output.into(),
            valid: true,
            attempts,
        }
    }

    /// The output prefixed with the specialist's label.
    pub fn labeled(&self) -> String {
        format!("{}: {}", self.specialist.result_label(), self.output)
    }
}

/// Everything the synthesis step reads
#[derive(Debug, Clone)]
pub struct SynthesisInput {
    pub original: String,
    pub refined: Option<String>,
    pub results: Vec<AgentResult>,
}

impl SynthesisInput {
    pub fn new(
        original: impl Into<String>,
        refined: Option<String>,
        results: Vec<AgentResult>,
    ) -> Self {
        Self {
            original: original.into(),
            refined,
            results,
        }
    }

    /// The refined request, or the original when no refinement happened.
    pub fn refined_or_original(&self) -> &str {
        self.refined.as_deref().unwrap_or(&self.original)
    }
}

/// The single externally visible outcome of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum FinalAnswer {
    /// Validated synthesis text
    Answer(String),
    /// Planning exhausted its attempts; nothing was delegated
    PlanningFailed,
    /// Synthesis exhausted its attempts
    SynthesisFailed,
    /// Anything else; the detail is for logs only
    Unexpected(String),
}

impl FinalAnswer {
    /// Plain text shown to the user.
    pub fn text(&self) -> &str {
        match self {
            FinalAnswer::Answer(text) => text,
            FinalAnswer::PlanningFailed => PLANNING_FAILED_MESSAGE,
            FinalAnswer::SynthesisFailed => SYNTHESIS_FAILED_MESSAGE,
            FinalAnswer::Unexpected(_) => UNEXPECTED_FAILURE_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FinalAnswer::Answer(_))
    }
}

impl std::fmt::Display for FinalAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Summary of one run, for display and JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationReport {
    pub request: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refined_request: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    pub results: Vec<AgentResult>,
    pub answer: FinalAnswer,
}

impl OrchestrationReport {
    /// A report for a run that stopped before producing any results.
    pub fn failed(request: impl Into<String>, answer: FinalAnswer) -> Self {
        Self {
            request: request.into(),
            refined_request: None,
            plan: None,
            results: Vec::new(),
            answer,
        }
    }

    pub fn answer_text(&self) -> &str {
        self.answer.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_texts_are_distinct_and_labeled() {
        let unexpected = FinalAnswer::Unexpected("join error".to_string());
        let texts = [
            FinalAnswer::PlanningFailed.text(),
            FinalAnswer::SynthesisFailed.text(),
            unexpected.text(),
        ];
        for text in texts {
            assert!(text.starts_with("Error:"));
        }
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
    }

    #[test]
    fn test_unexpected_detail_is_not_shown() {
        let answer = FinalAnswer::Unexpected("panicked at src/lib.rs".to_string());
        assert!(!answer.text().contains("panicked"));
        assert!(!answer.is_success());
    }

    #[test]
    fn test_labeled_result() {
        let result = AgentResult::validated(Specialist::Code, "def f(): pass", 1);
        assert_eq!(result.labeled(), "CODER OUTPUT: def f(): pass");
    }

    #[test]
    fn test_refined_or_original() {
        let input = SynthesisInput::new("raw", None, vec![]);
        assert_eq!(input.refined_or_original(), "raw");
        let input = SynthesisInput::new("raw", Some("clear".to_string()), vec![]);
        assert_eq!(input.refined_or_original(), "clear");
    }

    #[test]
    fn test_final_answer_json_shape() {
        let json = serde_json::to_value(FinalAnswer::Answer("hi".to_string())).unwrap();
        assert_eq!(json["status"], "answer");
        assert_eq!(json["detail"], "hi");
        let json = serde_json::to_value(FinalAnswer::PlanningFailed).unwrap();
        assert_eq!(json["status"], "planning_failed");
    }
}
