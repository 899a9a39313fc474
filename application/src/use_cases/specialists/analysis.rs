//! Analysis specialist
//!
//! Three steps per run:
//!
//! 1. **Decide** whether the query needs fresh web context ([`ResearchDecision`])
//! 2. **Act**: on `Search`, generate a short query and collect up to three hits
//! 3. **Report** over whatever context was gathered
//!
//! Only the report call can fail the agent; the first two steps degrade to
//! "no context".

use crate::ports::completion::CompletionBackend;
use crate::ports::search::{SearchBackend, SearchOutcome};
use crate::ports::specialist::{AgentError, SpecialistAgent};
use crate::use_cases::shared::{complete_within, system_and_user};
use async_trait::async_trait;
use conductor_domain::{AgentPromptTemplate, CompletionOptions, ResearchDecision, Specialist};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Context used when a search succeeds with nothing to show
pub const NO_SEARCH_RESULTS: &str = "No search results found.";

/// Researches and reports on a query
pub struct AnalysisAgent {
    backend: Arc<dyn CompletionBackend>,
    search: Option<Arc<dyn SearchBackend>>,
    call_timeout: Option<Duration>,
}

impl AnalysisAgent {
    pub fn new(backend: Arc<dyn CompletionBackend>, call_timeout: Option<Duration>) -> Self {
        Self {
            backend,
            search: None,
            call_timeout,
        }
    }

    /// Allow the agent to consult a web search backend
    pub fn with_search(mut self, search: Arc<dyn SearchBackend>) -> Self {
        self.search = Some(search);
        self
    }

    async fn ask(&self, system: &str, prompt: String) -> Result<String, AgentError> {
        let messages = system_and_user(system, prompt);
        let text = complete_within(
            self.backend.as_ref(),
            &messages,
            &CompletionOptions::default(),
            self.call_timeout,
        )
        .await?;
        Ok(text)
    }

    async fn decide(&self, query: &str) -> ResearchDecision {
        if self.search.is_none() {
            return ResearchDecision::Analyze;
        }

        match self
            .ask(
                AgentPromptTemplate::analyst_system(),
                AgentPromptTemplate::research_decision(query),
            )
            .await
        {
            Ok(reply) => ResearchDecision::parse(&reply).unwrap_or_else(|| {
                debug!("Unrecognised research decision {:?}; analyzing directly", reply);
                ResearchDecision::Analyze
            }),
            Err(e) => {
                debug!("Research decision failed ({}); analyzing directly", e);
                ResearchDecision::Analyze
            }
        }
    }

    /// Web context for `query`, or an empty string when none could be gathered
    async fn gather_context(&self, search: &dyn SearchBackend, query: &str) -> String {
        let search_query = match self
            .ask(
                AgentPromptTemplate::analyst_system(),
                AgentPromptTemplate::search_query(query),
            )
            .await
        {
            Ok(text) => clean_query(&text),
            Err(e) => {
                warn!("Search query generation failed: {}", e);
                return String::new();
            }
        };

        if search_query.is_empty() {
            warn!("Search query generation returned nothing");
            return String::new();
        }

        info!(provider = search.name(), "Searching: {}", search_query);
        match search.search(&search_query).await {
            Ok(outcome) => format_outcome(&outcome),
            Err(e) => {
                warn!(provider = search.name(), "Search failed: {}", e);
                String::new()
            }
        }
    }
}

#[async_trait]
impl SpecialistAgent for AnalysisAgent {
    fn kind(&self) -> Specialist {
        Specialist::Analysis
    }

    async fn run(&self, input: &str) -> Result<String, AgentError> {
        debug!(model = %self.backend.model(), "Analysis agent running");

        let context = match (self.decide(input).await, &self.search) {
            (ResearchDecision::Search, Some(search)) => {
                self.gather_context(search.as_ref(), input).await
            }
            _ => String::new(),
        };

        self.ask(
            AgentPromptTemplate::analyst_report_system(),
            AgentPromptTemplate::analyst_report(&context, input),
        )
        .await
    }
}

/// Strip whitespace and wrapping quotes a model tends to add around a query
fn clean_query(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .trim()
        .to_string()
}

/// Format hits as `- title: snippet` lines
fn format_outcome(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Hits(hits) => hits
            .iter()
            .map(|hit| format!("- {}: {}", hit.title, hit.snippet))
            .collect::<Vec<_>>()
            .join("\n"),
        SearchOutcome::NoResults => NO_SEARCH_RESULTS.to_string(),
    }
}
