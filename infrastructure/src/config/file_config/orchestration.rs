//! Orchestration configuration from TOML (`[orchestration]` section)

use conductor_application::ExecutionParams;
use conductor_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw orchestration configuration from TOML
///
/// ```toml
/// [orchestration]
/// max_attempts = 3        # per specialist and for synthesis
/// plan_attempts = 3
/// refine_input = true
/// call_timeout_secs = 120 # 0 disables the per-call timeout
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOrchestrationConfig {
    pub max_attempts: u32,
    pub plan_attempts: u32,
    pub refine_input: bool,
    pub call_timeout_secs: u64,
}

impl Default for FileOrchestrationConfig {
    fn default() -> Self {
        let params = ExecutionParams::default();
        Self {
            max_attempts: params.max_attempts,
            plan_attempts: params.plan_attempts,
            refine_input: params.refine_input,
            call_timeout_secs: params.call_timeout.map_or(0, |t| t.as_secs()),
        }
    }
}

impl FileOrchestrationConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [
            ("orchestration.max_attempts", self.max_attempts),
            ("orchestration.plan_attempts", self.plan_attempts),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroAttempts {
                        field: field.to_string(),
                    },
                    format!("{}: must be at least 1", field),
                ));
            }
        }
        issues
    }

    pub fn to_execution_params(&self) -> ExecutionParams {
        let call_timeout = (self.call_timeout_secs > 0)
            .then(|| Duration::from_secs(self.call_timeout_secs));
        ExecutionParams::default()
            .with_max_attempts(self.max_attempts)
            .with_plan_attempts(self.plan_attempts)
            .with_refine_input(self.refine_input)
            .with_call_timeout(call_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_execution_params() {
        let params = FileOrchestrationConfig::default().to_execution_params();
        assert_eq!(params.max_attempts, 3);
        assert_eq!(params.plan_attempts, 3);
        assert!(params.refine_input);
        assert_eq!(params.call_timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = FileOrchestrationConfig {
            call_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.to_execution_params().call_timeout.is_none());
    }

    #[test]
    fn test_zero_attempts_is_error() {
        let config = FileOrchestrationConfig {
            max_attempts: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
