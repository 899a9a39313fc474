//! Synthesis step for the orchestration use case.

use super::Orchestrator;
use super::types::events;
use crate::ports::completion::CompletionBackend;
use crate::ports::conversation_logger::ConversationEvent;
use crate::use_cases::shared::{complete_within, system_and_user};
use crate::use_cases::validate_and_iterate::{Producer, ProducerError, validate_and_iterate};
use async_trait::async_trait;
use conductor_domain::{CompletionOptions, FinalAnswer, PromptTemplate, SynthesisInput};
use std::time::Duration;
use tracing::{info, warn};

/// Producer sending a synthesis prompt to the planner backend
struct SynthesisProducer<'a> {
    backend: &'a dyn CompletionBackend,
    call_timeout: Option<Duration>,
}

#[async_trait]
impl Producer for SynthesisProducer<'_> {
    fn label(&self) -> &str {
        "synthesis"
    }

    async fn produce(&self, input: &str) -> Result<String, ProducerError> {
        let messages = system_and_user(PromptTemplate::synthesis_system(), input);
        Ok(complete_within(
            self.backend,
            &messages,
            &CompletionOptions::default(),
            self.call_timeout,
        )
        .await?)
    }
}

impl Orchestrator {
    /// Merge the specialist results into the final answer.
    pub(super) async fn synthesize(&self, input: &SynthesisInput) -> FinalAnswer {
        info!("Synthesizing {} result(s)", input.results.len());

        let producer = SynthesisProducer {
            backend: self.planner.as_ref(),
            call_timeout: self.params.call_timeout,
        };
        let improver = self.improver();
        let prompt = PromptTemplate::synthesis_prompt(input);

        let outcome = validate_and_iterate(
            &producer,
            improver.as_ref(),
            &prompt,
            &self.keywords.synthesis,
            self.params.max_attempts,
        )
        .await;

        match outcome.output {
            Some(answer) => {
                self.logger.log(ConversationEvent::new(
                    events::SYNTHESIS_COMPLETED,
                    serde_json::json!({
                        "attempts": outcome.attempts,
                        "improvements": outcome.improvements,
                        "answer": answer,
                    }),
                ));
                FinalAnswer::Answer(answer)
            }
            None => {
                warn!(attempts = outcome.attempts, "Synthesis exhausted");
                self.logger.log(ConversationEvent::new(
                    events::SYNTHESIS_FAILED,
                    serde_json::json!({ "attempts": outcome.attempts }),
                ));
                FinalAnswer::SynthesisFailed
            }
        }
    }
}
