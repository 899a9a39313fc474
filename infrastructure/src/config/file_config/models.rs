//! Role-based model configuration from TOML (`[models]` section)

use conductor_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Role-based model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// planner = "llama3.2"          # Refinement, planning, improvement, synthesis
/// analyst = "phi4-mini"         # Analysis specialist
/// coder = "qwen2.5-coder:7b"    # Code specialist
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub planner: Option<String>,
    pub analyst: Option<String>,
    pub coder: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
        fallback: Model,
    ) -> (Model, Vec<ConfigIssue>) {
        match value {
            None => (fallback, vec![]),
            Some(s) if s.trim().is_empty() => {
                let issue = ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: format!("models.{}", field),
                    },
                    format!("models.{}: model name cannot be empty", field),
                );
                (fallback, vec![issue])
            }
            Some(s) => {
                let Ok(model) = s.trim().parse::<Model>();
                (model, vec![])
            }
        }
    }

    pub fn parse_planner(&self) -> (Model, Vec<ConfigIssue>) {
        Self::parse_single_model("planner", self.planner.as_ref(), Model::default_planner())
    }

    pub fn parse_analyst(&self) -> (Model, Vec<ConfigIssue>) {
        Self::parse_single_model("analyst", self.analyst.as_ref(), Model::default_analyst())
    }

    pub fn parse_coder(&self) -> (Model, Vec<ConfigIssue>) {
        Self::parse_single_model("coder", self.coder.as_ref(), Model::default_coder())
    }
}
