//! Infrastructure layer for agent-conductor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod ollama;
pub mod search;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileModelsConfig, FileOutputConfig,
    FileReplConfig, FileSearchConfig, SearchProvider,
};
pub use logging::JsonlConversationLogger;
pub use ollama::{OllamaClient, OllamaCompletionBackend, OllamaError};
pub use search::{DuckDuckGoSearchBackend, GoogleSearchBackend};
