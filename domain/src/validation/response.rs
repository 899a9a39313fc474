//! The Response Validator.

use super::keywords::KeywordSet;

/// Message for a response with no content.
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "I couldn't generate a response. Please try rephrasing your request.";

/// Message for a response that mentions none of the expected keywords.
pub const UNRELATED_RESPONSE_MESSAGE: &str =
    "The response seems unrelated to your request. Please try again with more details.";

/// Outcome of validating one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_valid: bool,
    /// The response itself when valid, otherwise a user-facing notice
    pub message: String,
}

impl Verdict {
    fn accept(response: &str) -> Self {
        Self {
            is_valid: true,
            message: response.to_string(),
        }
    }

    fn reject(message: &str) -> Self {
        Self {
            is_valid: false,
            message: message.to_string(),
        }
    }
}

/// Judge whether `response` is acceptable for `expected`.
///
/// Rules, in order: blank responses are rejected; with a non-empty keyword
/// set, responses mentioning no keyword are rejected; everything else is
/// accepted.
pub fn validate_response(response: &str, expected: &KeywordSet) -> Verdict {
    if response.trim().is_empty() {
        return Verdict::reject(EMPTY_RESPONSE_MESSAGE);
    }

    if !expected.is_empty() && !expected.matches(response) {
        return Verdict::reject(UNRELATED_RESPONSE_MESSAGE);
    }

    Verdict::accept(response)
}
