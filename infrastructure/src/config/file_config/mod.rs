//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod logging;
mod models;
mod orchestration;
mod output;
mod repl;
mod search;
mod validation;

pub use backend::{DEFAULT_OLLAMA_URL, FileBackendConfig};
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use orchestration::FileOrchestrationConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use search::{FileSearchConfig, SearchProvider};
pub use validation::FileValidationConfig;

use conductor_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration:\n{}", bullet_list(.0))]
    Invalid(Vec<String>),
}

fn bullet_list(messages: &[String]) -> String {
    messages
        .iter()
        .map(|m| format!("  - {}", m))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Expand a leading `~/` to the home directory
pub(crate) fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Ollama endpoint settings
    pub backend: FileBackendConfig,
    /// Web search settings for the Analysis agent
    pub search: FileSearchConfig,
    /// Attempt limits, refinement, per-call timeout
    pub orchestration: FileOrchestrationConfig,
    /// Expected keyword lists
    pub validation: FileValidationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript and diagnostic log files
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Empty model names
    /// 2. Zero attempt bounds
    /// 3. Unknown enum values and missing search credentials
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Model parse validation (catches empty names)
        issues.extend(self.models.parse_planner().1);
        issues.extend(self.models.parse_analyst().1);
        issues.extend(self.models.parse_coder().1);

        // 2. Attempt bounds
        issues.extend(self.orchestration.validate());

        // 3. Enum parse validation
        issues.extend(self.search.parse_provider().1);
        issues.extend(self.output.parse_format().1);

        issues
    }

    /// Validate and split the issues: errors become a
    /// [`ConfigValidationError`], warnings are returned for logging.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|issue| issue.message).collect(),
            ))
        }
    }
}
