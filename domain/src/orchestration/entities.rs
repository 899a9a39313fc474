//! Orchestration domain entities

use serde::{Deserialize, Serialize};

/// Phase of an orchestration run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Optional rewrite of the user request
    Refinement,
    /// Intent classification by the planner
    Planning,
    /// Specialist fan-out with per-agent validation
    Delegation,
    /// Merging specialist results into the final answer
    Synthesis,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Refinement => "refinement",
            Phase::Planning => "planning",
            Phase::Delegation => "delegation",
            Phase::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Refinement => "Refining request",
            Phase::Planning => "Planning",
            Phase::Delegation => "Delegating to specialists",
            Phase::Synthesis => "Synthesizing answer",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
