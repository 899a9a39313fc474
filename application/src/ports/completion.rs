//! Completion backend port
//!
//! Defines the interface for one-shot text completions from a model backend.

use async_trait::async_trait;
use conductor_domain::{CompletionOptions, Message, Model};
use thiserror::Error;

/// Errors that can occur while requesting a completion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Timeout")]
    Timeout,
}

/// A completion backend bound to a single model
///
/// Implementations (adapters) live in the infrastructure layer. Each handle
/// answers for exactly one [`Model`]; the planner and both specialists hold
/// their own handle.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// The model this handle is bound to
    fn model(&self) -> &Model;

    /// Send role-tagged messages and return the assistant's text
    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, CompletionError>;
}
