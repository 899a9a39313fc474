//! Specialist agent port

use super::completion::CompletionError;
use async_trait::async_trait;
use conductor_domain::Specialist;
use thiserror::Error;

/// Errors raised by a specialist agent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),
}

/// A specialist that turns a task description into text
///
/// Each specialist runs its own internal protocol; the orchestrator only
/// sees the final text or the failure.
#[async_trait]
pub trait SpecialistAgent: Send + Sync {
    fn kind(&self) -> Specialist;

    async fn run(&self, input: &str) -> Result<String, AgentError>;
}
