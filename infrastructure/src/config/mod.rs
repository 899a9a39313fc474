//! Configuration file loading for agent-conductor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `CONDUCTOR_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./conductor.toml` or `./.conductor.toml`
//! 4. Global: `$XDG_CONFIG_HOME/agent-conductor/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the presentation layer.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_OLLAMA_URL, FileBackendConfig, FileConfig, FileLoggingConfig,
    FileModelsConfig, FileOrchestrationConfig, FileOutputConfig, FileReplConfig,
    FileSearchConfig, FileValidationConfig, SearchProvider,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
