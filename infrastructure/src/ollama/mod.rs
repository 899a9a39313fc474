//! Ollama adapter
//!
//! Implements the [`CompletionBackend`](conductor_application::CompletionBackend)
//! port against a local Ollama server's `/api/chat` endpoint.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{OllamaClient, OllamaCompletionBackend};
pub use error::{OllamaError, Result};
