//! Web search adapters for the Analysis agent
//!
//! Both implement [`SearchBackend`](conductor_application::SearchBackend)
//! and return at most three hits.

pub mod duckduckgo;
pub mod google;

pub use duckduckgo::DuckDuckGoSearchBackend;
pub use google::GoogleSearchBackend;

use crate::config::{FileSearchConfig, SearchProvider};
use conductor_application::{SearchBackend, SearchError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Timeout for a single search request
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("agent-conductor/", env!("CARGO_PKG_VERSION"));

fn http_client() -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(SEARCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SearchError::RequestFailed(e.to_string()))
}

/// Send a prepared GET and decode the JSON body
async fn fetch_json(request: reqwest::RequestBuilder) -> Result<serde_json::Value, SearchError> {
    let response = request
        .send()
        .await
        .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::RequestFailed(format!(
            "search API returned {}",
            status
        )));
    }

    response
        .json()
        .await
        .map_err(|e| SearchError::InvalidResponse(e.to_string()))
}

/// Build the configured search backend.
///
/// Returns `None` when search is disabled, credentials are incomplete, or
/// the HTTP client cannot be created; the Analysis agent then always
/// analyzes directly.
pub fn from_config(config: &FileSearchConfig) -> Option<Arc<dyn SearchBackend>> {
    let (provider, _) = config.parse_provider();
    let backend: Result<Arc<dyn SearchBackend>, SearchError> = match provider {
        SearchProvider::None => return None,
        SearchProvider::DuckDuckGo => {
            DuckDuckGoSearchBackend::new().map(|b| Arc::new(b) as Arc<dyn SearchBackend>)
        }
        SearchProvider::Google => {
            let (Some(key), Some(cx)) = (&config.google_api_key, &config.google_cx) else {
                return None;
            };
            GoogleSearchBackend::new(key.clone(), cx.clone())
                .map(|b| Arc::new(b) as Arc<dyn SearchBackend>)
        }
    };

    match backend {
        Ok(backend) => {
            info!(provider = backend.name(), "Web search enabled");
            Some(backend)
        }
        Err(e) => {
            warn!("Web search disabled: {}", e);
            None
        }
    }
}
