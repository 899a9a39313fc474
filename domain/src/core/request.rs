//! Request value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A user request to be answered by the agents (Value Object)
///
/// Immutable for the whole pipeline. Refinement derives a new text rather
/// than mutating the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    content: String,
}

impl Request {
    /// Create a new request, rejecting empty or whitespace-only content
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyRequest);
        }
        Ok(Self { content })
    }

    /// Try to create a new request, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        Self::new(content).ok()
    }

    /// Get the request content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Request {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Request::new(s)
    }
}

impl TryFrom<String> for Request {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Request::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_creation() {
        let r = Request::new("Summarise the sales data").unwrap();
        assert_eq!(r.content(), "Summarise the sales data");
    }

    #[test]
    fn test_empty_request_rejected() {
        assert!(matches!(Request::new(""), Err(DomainError::EmptyRequest)));
        assert!(Request::try_new("   \n\t").is_none());
    }

    #[test]
    fn test_try_from_str() {
        let r: Request = "Write a script".try_into().unwrap();
        assert_eq!(r.into_content(), "Write a script");
    }
}
