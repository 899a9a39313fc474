//! Error types for the Ollama adapter

use conductor_application::CompletionError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Cannot reach Ollama at {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("Ollama returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse Ollama response: {0}")]
    InvalidBody(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP client error: {0}")]
    Http(String),
}

impl OllamaError {
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OllamaError::Timeout
        } else if err.is_connect() {
            OllamaError::Unreachable {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            OllamaError::InvalidBody(err.to_string())
        } else {
            OllamaError::Http(err.to_string())
        }
    }
}

impl From<OllamaError> for CompletionError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Unreachable { .. } => CompletionError::BackendUnavailable(err.to_string()),
            OllamaError::Timeout => CompletionError::Timeout,
            OllamaError::Status { .. } | OllamaError::InvalidBody(_) | OllamaError::Http(_) => {
                CompletionError::BackendError(err.to_string())
            }
        }
    }
}
