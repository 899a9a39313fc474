//! Plan parsing from planner responses.
//!
//! The planner is asked for a JSON object of the form
//! `{"type": "ANALYSIS" | "CODE" | "BOTH", "reason": "..."}`. Two layouts are
//! accepted:
//!
//! 1. the whole response is the JSON object
//! 2. the object sits inside a fenced ` ```json ` (or bare ` ``` `) block
//!
//! Anything else is a [`PlanParseError`], which the caller treats as a
//! retryable planning failure.

use crate::orchestration::intent::{Intent, Plan};
use thiserror::Error;

/// Why a planner response could not be turned into a [`Plan`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanParseError {
    #[error("response contains no JSON object")]
    NoJson,

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("missing \"type\" field")]
    MissingIntent,

    #[error("{0}")]
    UnknownIntent(String),
}

/// Parse a [`Plan`] from planner response text.
pub fn parse_plan(response: &str) -> Result<Plan, PlanParseError> {
    let trimmed = response.trim();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return parse_plan_json(&value);
    }

    for block in fenced_blocks(trimmed) {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&block) {
            return parse_plan_json(&value);
        }
    }

    Err(PlanParseError::NoJson)
}

/// Parse a plan from an already-decoded JSON value.
pub fn parse_plan_json(json: &serde_json::Value) -> Result<Plan, PlanParseError> {
    let object = json.as_object().ok_or(PlanParseError::NotAnObject)?;

    let intent = object
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(PlanParseError::MissingIntent)?
        .parse::<Intent>()
        .map_err(PlanParseError::UnknownIntent)?;

    let reason = object
        .get("reason")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .trim();

    Ok(Plan::new(intent, reason))
}

/// Collect the bodies of ```` ``` ```` fenced blocks tagged `json` or untagged.
fn fenced_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let fence = line.trim();
        match current.as_mut() {
            None => {
                if fence == "```" || fence.eq_ignore_ascii_case("```json") {
                    current = Some(String::new());
                }
            }
            Some(body) => {
                if fence == "```" {
                    blocks.push(std::mem::take(body));
                    current = None;
                } else {
                    body.push_str(line);
                    body.push('\n');
                }
            }
        }
    }

    blocks
}
