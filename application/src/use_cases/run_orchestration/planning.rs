//! Planning step for the orchestration use case.

use super::Orchestrator;
use super::types::{PlanAttemptError, PlanningFailure};
use crate::use_cases::shared::{LOG_PREVIEW_BYTES, complete_within};
use conductor_domain::util::truncate_str;
use conductor_domain::{CompletionOptions, Message, Plan, PromptTemplate, parse_plan};
use tracing::{debug, info, warn};

impl Orchestrator {
    /// Ask the planner which specialists the request needs.
    ///
    /// Backend failures and unparseable answers are both retried with the
    /// same prompt, up to `plan_attempts` calls in total.
    pub(super) async fn plan(&self, request: &str) -> Result<Plan, PlanningFailure> {
        let messages = vec![Message::user(PromptTemplate::plan_prompt(request))];
        let max_attempts = self.params.plan_attempts;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            match self.plan_once(&messages).await {
                Ok(plan) => {
                    info!(
                        intent = %plan.intent,
                        attempt,
                        "Plan decided: {}",
                        plan.reason
                    );
                    return Ok(plan);
                }
                Err(e) => {
                    warn!(attempt, max_attempts, "Planning attempt failed: {}", e);
                    last_error = Some(e);
                }
            }
        }

        Err(PlanningFailure {
            attempts: max_attempts,
            last_error,
        })
    }

    async fn plan_once(&self, messages: &[Message]) -> Result<Plan, PlanAttemptError> {
        let response = complete_within(
            self.planner.as_ref(),
            messages,
            &CompletionOptions::default(),
            self.params.call_timeout,
        )
        .await?;
        debug!(
            "Planner response: {}",
            truncate_str(&response, LOG_PREVIEW_BYTES)
        );
        Ok(parse_plan(&response)?)
    }
}
