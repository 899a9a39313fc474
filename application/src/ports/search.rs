//! Web search port

use async_trait::async_trait;
use thiserror::Error;

/// Upper bound on hits a search outcome carries
pub const MAX_SEARCH_HITS: usize = 3;

/// Errors that can occur during a web search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

/// One search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
}

impl SearchHit {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
        }
    }
}

/// Result of a successful search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Between one and [`MAX_SEARCH_HITS`] hits
    Hits(Vec<SearchHit>),
    NoResults,
}

impl SearchOutcome {
    /// Build an outcome from raw hits, keeping the first [`MAX_SEARCH_HITS`].
    pub fn from_hits(mut hits: Vec<SearchHit>) -> Self {
        if hits.is_empty() {
            return SearchOutcome::NoResults;
        }
        hits.truncate(MAX_SEARCH_HITS);
        SearchOutcome::Hits(hits)
    }
}

/// Web search backend
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &str;

    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError>;
}
