//! Execution parameters: use case loop control.
//!
//! [`ExecutionParams`] groups the static parameters that bound the
//! [`Orchestrator`](crate::use_cases::run_orchestration::Orchestrator):
//! attempt limits, refinement toggle and the per-call timeout.
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Orchestration loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Producer invocations per validate-and-iterate loop (specialists and synthesis).
    pub max_attempts: u32,
    /// Planner calls before planning is declared failed.
    pub plan_attempts: u32,
    /// Rewrite the request before planning.
    pub refine_input: bool,
    /// Wall-clock bound on every backend call.
    pub call_timeout: Option<Duration>,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            plan_attempts: 3,
            refine_input: true,
            call_timeout: Some(Duration::from_secs(120)),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_plan_attempts(mut self, max: u32) -> Self {
        self.plan_attempts = max;
        self
    }

    pub fn with_refine_input(mut self, refine: bool) -> Self {
        self.refine_input = refine;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ExecutionParams::default();
        assert_eq!(params.max_attempts, 3);
        assert_eq!(params.plan_attempts, 3);
        assert!(params.refine_input);
        assert_eq!(params.call_timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_builder() {
        let params = ExecutionParams::default()
            .with_max_attempts(5)
            .with_refine_input(false)
            .with_call_timeout(None);

        assert_eq!(params.max_attempts, 5);
        assert_eq!(params.plan_attempts, 3);
        assert!(!params.refine_input);
        assert!(params.call_timeout.is_none());
    }
}
