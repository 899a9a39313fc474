//! Domain layer for agent-conductor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Plan**: the planner's closed [`Intent`] decision (ANALYSIS, CODE or BOTH)
//!   deciding which [`Specialist`]s run
//! - **Validate-and-iterate**: every specialist output and the final synthesis
//!   pass through [`validate_response`], driven by a bounded
//!   [`AttemptMachine`](retry::AttemptMachine)
//! - **FinalAnswer**: the one externally visible outcome of a run, always
//!   plain text

pub mod config;
pub mod core;
pub mod orchestration;
pub mod prompt;
pub mod retry;
pub mod session;
pub mod util;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, model::Model, request::Request};
pub use orchestration::{
    entities::Phase,
    intent::{Intent, Plan, Specialist},
    plan_parser::{PlanParseError, parse_plan, parse_plan_json},
    research::ResearchDecision,
    value_objects::{
        AgentResult, AgentTask, FinalAnswer, OrchestrationReport, PLANNING_FAILED_MESSAGE,
        SYNTHESIS_FAILED_MESSAGE, SynthesisInput, UNEXPECTED_FAILURE_MESSAGE,
    },
};
pub use prompt::{AgentPromptTemplate, PromptTemplate};
pub use retry::{AttemptMachine, AttemptOutcome, AttemptState, Transition};
pub use session::entities::{CompletionOptions, Message, Role};
pub use validation::{
    keywords::KeywordSet,
    response::{EMPTY_RESPONSE_MESSAGE, UNRELATED_RESPONSE_MESSAGE, Verdict, validate_response},
};
