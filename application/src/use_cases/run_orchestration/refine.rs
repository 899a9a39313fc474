//! Input refinement for the orchestration use case.

use super::Orchestrator;
use crate::use_cases::shared::{complete_within, system_and_user};
use conductor_domain::{CompletionOptions, PromptTemplate};
use tracing::{debug, warn};

impl Orchestrator {
    /// Rewrite the request more precisely.
    ///
    /// Returns `request` unchanged when the planner fails or answers with
    /// nothing, so the result is never empty.
    pub(super) async fn refine(&self, request: &str) -> String {
        let messages = system_and_user(
            PromptTemplate::refine_system(),
            PromptTemplate::refine_prompt(request),
        );

        match complete_within(
            self.planner.as_ref(),
            &messages,
            &CompletionOptions::default(),
            self.params.call_timeout,
        )
        .await
        {
            Ok(text) if !text.trim().is_empty() => {
                let refined = text.trim().to_string();
                debug!("Refined request: {}", refined);
                refined
            }
            Ok(_) => {
                debug!("Refinement was empty; using the original request");
                request.to_string()
            }
            Err(e) => {
                warn!("Refinement failed ({}); using the original request", e);
                request.to_string()
            }
        }
    }
}
