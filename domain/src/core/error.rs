//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Request cannot be empty")]
    EmptyRequest,

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Orchestration error: {0}")]
    OrchestrationError(String),
}

impl DomainError {
    /// Check if this error was caused by the user's input rather than the system
    pub fn is_input_error(&self) -> bool {
        matches!(self, DomainError::EmptyRequest)
    }
}
