//! Response validation configuration from TOML (`[validation]` section)

use conductor_application::KeywordConfig;
use conductor_domain::KeywordSet;
use serde::{Deserialize, Serialize};

/// Expected keyword lists; an empty list accepts any non-empty response
///
/// ```toml
/// [validation]
/// analysis = ["data", "analysis", "report"]
/// code = ["code", "function", "script"]
/// synthesis = ["analysis", "code", "report"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileValidationConfig {
    pub analysis: KeywordSet,
    pub code: KeywordSet,
    pub synthesis: KeywordSet,
}

impl Default for FileValidationConfig {
    fn default() -> Self {
        let keywords = KeywordConfig::default();
        Self {
            analysis: keywords.analysis,
            code: keywords.code,
            synthesis: keywords.synthesis,
        }
    }
}

impl FileValidationConfig {
    pub fn to_keyword_config(&self) -> KeywordConfig {
        KeywordConfig {
            analysis: self.analysis.clone(),
            code: self.code.clone(),
            synthesis: self.synthesis.clone(),
        }
    }
}
