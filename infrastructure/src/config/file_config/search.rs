//! Web search configuration from TOML (`[search]` section)

use conductor_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Which search adapter backs the Analysis agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchProvider {
    Google,
    DuckDuckGo,
    None,
}

impl SearchProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchProvider::Google => "google",
            SearchProvider::DuckDuckGo => "duckduckgo",
            SearchProvider::None => "none",
        }
    }
}

impl std::str::FromStr for SearchProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(SearchProvider::Google),
            "duckduckgo" | "ddg" => Ok(SearchProvider::DuckDuckGo),
            "none" | "off" | "" => Ok(SearchProvider::None),
            other => Err(other.to_string()),
        }
    }
}

/// Raw search configuration from TOML
///
/// ```toml
/// [search]
/// provider = "google"          # google | duckduckgo | none
/// google_api_key = "..."
/// google_cx = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    pub provider: String,
    pub google_api_key: Option<String>,
    pub google_cx: Option<String>,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            provider: "duckduckgo".to_string(),
            google_api_key: None,
            google_cx: None,
        }
    }
}

impl FileSearchConfig {
    /// Parse the provider, downgrading to [`SearchProvider::None`] when it is
    /// unknown or lacks credentials.
    pub fn parse_provider(&self) -> (SearchProvider, Vec<ConfigIssue>) {
        let provider = match self.provider.parse::<SearchProvider>() {
            Ok(provider) => provider,
            Err(value) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "search.provider".to_string(),
                        value,
                        valid_values: vec![
                            "google".to_string(),
                            "duckduckgo".to_string(),
                            "none".to_string(),
                        ],
                    },
                    format!(
                        "search.provider: unknown value '{}', web search disabled",
                        self.provider
                    ),
                );
                return (SearchProvider::None, vec![issue]);
            }
        };

        if provider == SearchProvider::Google {
            let mut issues = Vec::new();
            for (field, value) in [
                ("search.google_api_key", &self.google_api_key),
                ("search.google_cx", &self.google_cx),
            ] {
                if value.as_deref().is_none_or(|v| v.trim().is_empty()) {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::MissingCredential {
                            field: field.to_string(),
                        },
                        format!("{}: required for Google search, web search disabled", field),
                    ));
                }
            }
            if !issues.is_empty() {
                return (SearchProvider::None, issues);
            }
        }

        (provider, vec![])
    }
}
