//! DuckDuckGo Instant Answer API backend (no API key)
//!
//! The Instant Answer API returns abstracts, direct answers and related
//! topics rather than a ranked result list. Each of those becomes a hit:
//!
//! - **Abstract**: `Heading` / `AbstractText`
//! - **Answer**: direct factual answers
//! - **Definition**: dictionary-style definitions
//! - **Related topics**: `Text` entries, including those inside topic groups

use super::{fetch_json, http_client};
use async_trait::async_trait;
use conductor_application::{MAX_SEARCH_HITS, SearchBackend, SearchError, SearchHit, SearchOutcome};
use serde_json::Value;
use tracing::debug;

const DDG_API_URL: &str = "https://api.duckduckgo.com/";

pub struct DuckDuckGoSearchBackend {
    client: reqwest::Client,
}

impl DuckDuckGoSearchBackend {
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self {
            client: http_client()?,
        })
    }
}

#[async_trait]
impl SearchBackend for DuckDuckGoSearchBackend {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let request = self.client.get(DDG_API_URL).query(&[
            ("q", query),
            ("format", "json"),
            ("no_html", "1"),
            ("skip_disambig", "1"),
        ]);
        let body = fetch_json(request).await?;
        let outcome = SearchOutcome::from_hits(collect_hits(query, &body));
        debug!(?outcome, "DuckDuckGo search finished");
        Ok(outcome)
    }
}

fn non_empty(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

fn collect_hits(query: &str, data: &Value) -> Vec<SearchHit> {
    let mut hits = Vec::new();

    if let Some(abstract_text) = non_empty(&data["AbstractText"]) {
        let title = non_empty(&data["Heading"])
            .or_else(|| non_empty(&data["AbstractSource"]))
            .unwrap_or(query);
        hits.push(SearchHit::new(title, abstract_text));
    }

    if let Some(answer) = non_empty(&data["Answer"]) {
        hits.push(SearchHit::new("Instant Answer", answer));
    }

    if let Some(definition) = non_empty(&data["Definition"]) {
        let source = non_empty(&data["DefinitionSource"]).unwrap_or("Definition");
        hits.push(SearchHit::new(source, definition));
    }

    if let Some(topics) = data["RelatedTopics"].as_array() {
        for topic in topics {
            if hits.len() >= MAX_SEARCH_HITS {
                break;
            }
            match topic["Topics"].as_array() {
                // Topic group
                Some(group) => hits.extend(group.iter().filter_map(topic_hit)),
                None => hits.extend(topic_hit(topic)),
            }
        }
    }

    hits.truncate(MAX_SEARCH_HITS);
    hits
}

/// Related topic `Text` reads "Title - description"; split it when it can be
fn topic_hit(topic: &Value) -> Option<SearchHit> {
    let text = non_empty(&topic["Text"])?;
    Some(match text.split_once(" - ") {
        Some((title, snippet)) => SearchHit::new(title.trim(), snippet.trim()),
        None => SearchHit::new(text, text),
    })
}
