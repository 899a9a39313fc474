//! Delegation step for the orchestration use case.
//!
//! Each specialist named by the plan runs its own validate-and-iterate loop
//! in a separate task. Results are collected into fixed slots so the final
//! order never depends on which task finished first.

use super::Orchestrator;
use super::types::events;
use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::validate_and_iterate::{AgentProducer, validate_and_iterate};
use conductor_domain::{AgentResult, AgentTask, Phase, Plan, Specialist};
use tokio::task::JoinSet;
use tracing::{error, info, warn};

impl Orchestrator {
    /// Run every specialist the plan requires and return the validated
    /// results, Analysis before Code.
    pub(super) async fn delegate(
        &self,
        plan: &Plan,
        input: &str,
        progress: &dyn ProgressNotifier,
    ) -> Vec<AgentResult> {
        let specialists = plan.specialists();
        info!("Delegating to {} specialist(s)", specialists.len());
        progress.on_phase_start(&Phase::Delegation, specialists.len());

        let mut join_set = JoinSet::new();

        for &specialist in specialists {
            let task = AgentTask::new(
                specialist,
                input,
                self.keywords.for_specialist(specialist).clone(),
            );
            let producer = AgentProducer(self.specialist(specialist));
            let improver = self.improver();
            let max_attempts = self.params.max_attempts;

            join_set.spawn(async move {
                let outcome = validate_and_iterate(
                    &producer,
                    improver.as_ref(),
                    &task.input,
                    &task.keywords,
                    max_attempts,
                )
                .await;
                (task.specialist, outcome)
            });
        }

        let mut slots: [Option<AgentResult>; Specialist::COUNT] = Default::default();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((specialist, outcome)) => {
                    progress.on_specialist_complete(
                        specialist,
                        outcome.is_validated(),
                        outcome.attempts,
                    );
                    match outcome.output {
                        Some(output) => {
                            info!(%specialist, attempts = outcome.attempts, "Specialist succeeded");
                            self.logger.log(ConversationEvent::new(
                                events::AGENT_RESULT,
                                serde_json::json!({
                                    "specialist": specialist.as_str(),
                                    "attempts": outcome.attempts,
                                    "improvements": outcome.improvements,
                                    "output": output,
                                }),
                            ));
                            slots[specialist.slot()] =
                                Some(AgentResult::validated(specialist, output, outcome.attempts));
                        }
                        None => {
                            warn!(%specialist, attempts = outcome.attempts, "Specialist exhausted");
                            self.logger.log(ConversationEvent::new(
                                events::AGENT_EXHAUSTED,
                                serde_json::json!({
                                    "specialist": specialist.as_str(),
                                    "attempts": outcome.attempts,
                                }),
                            ));
                        }
                    }
                }
                Err(e) => {
                    error!("Specialist task failed to complete: {}", e);
                }
            }
        }

        progress.on_phase_complete(&Phase::Delegation);
        slots.into_iter().flatten().collect()
    }
}
