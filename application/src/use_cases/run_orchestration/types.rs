//! Type definitions for the orchestration use case.

use crate::ports::completion::CompletionError;
use conductor_domain::PlanParseError;
use thiserror::Error;

/// Why a single planner attempt produced no plan
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanAttemptError {
    #[error("Planner backend failed: {0}")]
    Backend(#[from] CompletionError),

    #[error("Planner response rejected: {0}")]
    Parse(#[from] PlanParseError),
}

/// Planning used up every attempt without a usable plan
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Planning failed after {attempts} attempt(s)")]
pub struct PlanningFailure {
    pub attempts: u32,
    pub last_error: Option<PlanAttemptError>,
}

/// Conversation log event names
pub(super) mod events {
    pub const REQUEST_RECEIVED: &str = "request_received";
    pub const INPUT_REFINED: &str = "input_refined";
    pub const PLAN_DECIDED: &str = "plan_decided";
    pub const PLANNING_FAILED: &str = "planning_failed";
    pub const AGENT_RESULT: &str = "agent_result";
    pub const AGENT_EXHAUSTED: &str = "agent_exhausted";
    pub const SYNTHESIS_COMPLETED: &str = "synthesis_completed";
    pub const SYNTHESIS_FAILED: &str = "synthesis_failed";
}
