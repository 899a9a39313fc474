//! Output configuration from TOML (`[output]` section)

use conductor_domain::{ConfigIssue, ConfigIssueCode, OutputFormat};
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format: answer | full | json
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Parse the format string, falling back to the default on unknown values.
    pub fn parse_format(&self) -> (Option<OutputFormat>, Vec<ConfigIssue>) {
        let Some(raw) = &self.format else {
            return (None, vec![]);
        };
        match raw.trim().to_lowercase().as_str() {
            "answer" => (Some(OutputFormat::Answer), vec![]),
            "full" => (Some(OutputFormat::Full), vec![]),
            "json" => (Some(OutputFormat::Json), vec![]),
            _ => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "output.format".to_string(),
                        value: raw.clone(),
                        valid_values: vec![
                            "answer".to_string(),
                            "full".to_string(),
                            "json".to_string(),
                        ],
                    },
                    format!(
                        "output.format: unknown value '{}', falling back to 'answer'",
                        raw
                    ),
                );
                (None, vec![issue])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.parse_format().0, Some(OutputFormat::Json));
    }

    #[test]
    fn test_unknown_format_warns() {
        let config = FileOutputConfig {
            format: Some("yaml".to_string()),
            color: true,
        };
        let (format, issues) = config.parse_format();
        assert!(format.is_none());
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
