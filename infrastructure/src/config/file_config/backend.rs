//! Model backend configuration from TOML (`[backend]` section)

use serde::{Deserialize, Serialize};

/// Default Ollama endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Raw backend configuration from TOML
///
/// ```toml
/// [backend]
/// ollama_url = "http://localhost:11434"
/// request_timeout_secs = 300
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the Ollama server
    pub ollama_url: String,
    /// HTTP client timeout; the orchestration call timeout usually fires first
    pub request_timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            request_timeout_secs: 300,
        }
    }
}
