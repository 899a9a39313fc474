//! Google Custom Search JSON API backend

use super::{fetch_json, http_client};
use async_trait::async_trait;
use conductor_application::{MAX_SEARCH_HITS, SearchBackend, SearchError, SearchHit, SearchOutcome};
use serde_json::Value;
use tracing::debug;

const GOOGLE_API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Searches through a Programmable Search Engine (`key` + `cx`)
pub struct GoogleSearchBackend {
    client: reqwest::Client,
    api_key: String,
    cx: String,
}

impl GoogleSearchBackend {
    pub fn new(api_key: impl Into<String>, cx: impl Into<String>) -> Result<Self, SearchError> {
        Ok(Self {
            client: http_client()?,
            api_key: api_key.into(),
            cx: cx.into(),
        })
    }
}

#[async_trait]
impl SearchBackend for GoogleSearchBackend {
    fn name(&self) -> &str {
        "google"
    }

    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let num = MAX_SEARCH_HITS.to_string();
        let request = self.client.get(GOOGLE_API_URL).query(&[
            ("key", self.api_key.as_str()),
            ("cx", self.cx.as_str()),
            ("q", query),
            ("num", num.as_str()),
        ]);
        let body = fetch_json(request).await?;
        let outcome = parse_results(&body)?;
        debug!(?outcome, "Google search finished");
        Ok(outcome)
    }
}

/// Extract `items[].title` / `items[].snippet`.
///
/// A body without `items` is a search with no results; an error object is
/// an invalid response.
fn parse_results(body: &Value) -> Result<SearchOutcome, SearchError> {
    if let Some(message) = body["error"]["message"].as_str() {
        return Err(SearchError::InvalidResponse(message.to_string()));
    }

    let hits = body["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let title = item["title"].as_str()?;
                    let snippet = item["snippet"].as_str().unwrap_or_default();
                    Some(SearchHit::new(title.trim(), snippet.trim()))
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(SearchOutcome::from_hits(hits))
}
