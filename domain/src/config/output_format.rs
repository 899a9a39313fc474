//! Output format value object

use serde::{Deserialize, Serialize};

/// How a run's outcome is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the final answer (default)
    #[default]
    Answer,
    /// Plan, specialist results and the final answer
    Full,
    /// JSON output
    Json,
}
