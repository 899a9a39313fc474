//! Validate-and-iterate engine
//!
//! Runs a [`Producer`] under the bounded [`AttemptMachine`]: every response is
//! checked by [`validate_response`], a rejected response triggers one
//! improvement of the input (unless it was the last attempt), and a producer
//! failure simply moves on to the next attempt with the same input.

use crate::ports::completion::{CompletionBackend, CompletionError};
use crate::ports::specialist::{AgentError, SpecialistAgent};
use crate::use_cases::shared::{LOG_PREVIEW_BYTES, complete_within, system_and_user};
use async_trait::async_trait;
use conductor_domain::util::truncate_str;
use conductor_domain::{
    AttemptMachine, AttemptOutcome, CompletionOptions, KeywordSet, PromptTemplate, Transition,
    validate_response,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors a producer may report for one attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProducerError {
    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// Something that turns an input into a candidate response
#[async_trait]
pub trait Producer: Send + Sync {
    /// Short label for logs
    fn label(&self) -> &str;

    async fn produce(&self, input: &str) -> Result<String, ProducerError>;
}

/// Adapts a [`SpecialistAgent`] handle into a [`Producer`]
pub struct AgentProducer(pub Arc<dyn SpecialistAgent>);

#[async_trait]
impl Producer for AgentProducer {
    fn label(&self) -> &str {
        self.0.kind().as_str()
    }

    async fn produce(&self, input: &str) -> Result<String, ProducerError> {
        Ok(self.0.run(input).await?)
    }
}

/// Rewrites an input after its response was rejected
#[async_trait]
pub trait InputImprover: Send + Sync {
    /// Returns `None` when no usable rewrite was produced.
    async fn improve(&self, current_input: &str, rejected_response: &str) -> Option<String>;
}

/// [`InputImprover`] backed by the planner's completion backend
pub struct CompletionImprover {
    backend: Arc<dyn CompletionBackend>,
    call_timeout: Option<Duration>,
}

impl CompletionImprover {
    pub fn new(backend: Arc<dyn CompletionBackend>, call_timeout: Option<Duration>) -> Self {
        Self {
            backend,
            call_timeout,
        }
    }
}

#[async_trait]
impl InputImprover for CompletionImprover {
    async fn improve(&self, current_input: &str, rejected_response: &str) -> Option<String> {
        let messages = system_and_user(
            PromptTemplate::improve_system(),
            PromptTemplate::improve_prompt(current_input, rejected_response),
        );
        match complete_within(
            self.backend.as_ref(),
            &messages,
            &CompletionOptions::default(),
            self.call_timeout,
        )
        .await
        {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    debug!("Improver returned an empty rewrite; keeping input");
                    None
                } else {
                    Some(text.to_string())
                }
            }
            Err(e) => {
                warn!("Input improvement failed: {}", e);
                None
            }
        }
    }
}

/// What one validate-and-iterate run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationOutcome {
    /// The validated response, if any attempt was accepted
    pub output: Option<String>,
    /// Producer invocations made
    pub attempts: u32,
    /// Improvement calls made
    pub improvements: u32,
}

impl IterationOutcome {
    pub fn is_validated(&self) -> bool {
        self.output.is_some()
    }
}

/// Run `producer` until a response validates against `expected` or
/// `max_attempts` producer invocations are used up.
pub async fn validate_and_iterate(
    producer: &dyn Producer,
    improver: &dyn InputImprover,
    initial_input: &str,
    expected: &KeywordSet,
    max_attempts: u32,
) -> IterationOutcome {
    let mut machine = AttemptMachine::new(max_attempts);
    let mut current_input = initial_input.to_string();
    let mut improvements = 0;

    while let Some(attempt) = machine.current_attempt() {
        debug!(
            producer = producer.label(),
            attempt = attempt + 1,
            max_attempts,
            "Running attempt"
        );

        let (outcome, rejected) = match producer.produce(&current_input).await {
            Ok(response) => {
                let verdict = validate_response(&response, expected);
                if verdict.is_valid {
                    machine.advance(AttemptOutcome::Accepted);
                    info!(
                        producer = producer.label(),
                        attempts = machine.attempts_made(),
                        "Response validated"
                    );
                    return IterationOutcome {
                        output: Some(response),
                        attempts: machine.attempts_made(),
                        improvements,
                    };
                }
                debug!(
                    producer = producer.label(),
                    response = truncate_str(&response, LOG_PREVIEW_BYTES),
                    "Rejected: {}",
                    verdict.message
                );
                (AttemptOutcome::Rejected, Some(response))
            }
            Err(e) => {
                warn!(producer = producer.label(), attempt = attempt + 1, "Producer failed: {}", e);
                (AttemptOutcome::ProducerFailed, None)
            }
        };

        match machine.advance(outcome) {
            Transition::ImproveAndRetry => {
                if let Some(rejected) = rejected {
                    improvements += 1;
                    if let Some(better) = improver.improve(&current_input, &rejected).await {
                        current_input = better;
                    }
                }
            }
            Transition::Retry => {}
            Transition::Finished => break,
        }
    }

    warn!(
        producer = producer.label(),
        attempts = machine.attempts_made(),
        "Attempts exhausted without a valid response"
    );
    IterationOutcome {
        output: None,
        attempts: machine.attempts_made(),
        improvements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conductor_domain::{Message, Model};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Producer replaying scripted results and recording the inputs it saw
    struct ScriptedProducer {
        responses: Mutex<VecDeque<Result<String, ProducerError>>>,
        inputs: Mutex<Vec<String>>,
    }

    impl ScriptedProducer {
        fn new(responses: Vec<Result<String, ProducerError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                inputs: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.inputs.lock().unwrap().len()
        }

        fn inputs(&self) -> Vec<String> {
            self.inputs.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Producer for ScriptedProducer {
        fn label(&self) -> &str {
            "scripted"
        }

        async fn produce(&self, input: &str) -> Result<String, ProducerError> {
            self.inputs.lock().unwrap().push(input.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    /// Improver returning a numbered rewrite, or nothing when `fail` is set
    struct CountingImprover {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingImprover {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl InputImprover for CountingImprover {
        async fn improve(&self, _current: &str, _rejected: &str) -> Option<String> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                None
            } else {
                Some(format!("improved {}", n))
            }
        }
    }

    fn ok(text: &str) -> Result<String, ProducerError> {
        Ok(text.to_string())
    }

    fn failed() -> Result<String, ProducerError> {
        Err(ProducerError::Completion(CompletionError::BackendUnavailable(
            "down".to_string(),
        )))
    }

    #[tokio::test]
    async fn test_first_response_valid() {
        let producer = ScriptedProducer::new(vec![ok("Here is the data report")]);
        let improver = CountingImprover::new();

        let outcome =
            validate_and_iterate(&producer, &improver, "task", &KeywordSet::analysis(), 3).await;

        assert_eq!(outcome.output.as_deref(), Some("Here is the data report"));
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.improvements, 0);
        assert_eq!(improver.calls(), 0);
    }

    #[tokio::test]
    async fn test_always_invalid_exhausts() {
        let producer =
            ScriptedProducer::new(vec![ok("nothing"), ok("still nothing"), ok("nope")]);
        let improver = CountingImprover::new();

        let outcome =
            validate_and_iterate(&producer, &improver, "task", &KeywordSet::analysis(), 3).await;

        assert_eq!(outcome.output, None);
        assert_eq!(producer.calls(), 3);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(improver.calls(), 2);
        assert_eq!(outcome.improvements, 2);
    }

    #[tokio::test]
    async fn test_second_response_valid_after_one_improvement() {
        let producer = ScriptedProducer::new(vec![ok("off topic"), ok("the function below")]);
        let improver = CountingImprover::new();

        let outcome =
            validate_and_iterate(&producer, &improver, "write it", &KeywordSet::code(), 3).await;

        assert_eq!(outcome.output.as_deref(), Some("the function below"));
        assert_eq!(outcome.attempts, 2);
        assert_eq!(improver.calls(), 1);
        assert_eq!(producer.inputs(), vec!["write it", "improved 1"]);
    }

    #[tokio::test]
    async fn test_producer_failure_skips_improvement() {
        let producer = ScriptedProducer::new(vec![failed(), ok("a script")]);
        let improver = CountingImprover::new();

        let outcome =
            validate_and_iterate(&producer, &improver, "task", &KeywordSet::code(), 3).await;

        assert_eq!(outcome.output.as_deref(), Some("a script"));
        assert_eq!(improver.calls(), 0);
        assert_eq!(producer.inputs(), vec!["task", "task"]);
    }

    #[tokio::test]
    async fn test_failed_improvement_keeps_input() {
        let producer = ScriptedProducer::new(vec![ok("meh"), ok("meh"), ok("meh")]);
        let improver = CountingImprover::failing();

        let outcome =
            validate_and_iterate(&producer, &improver, "original", &KeywordSet::code(), 3).await;

        assert!(!outcome.is_validated());
        assert_eq!(outcome.improvements, 2);
        assert_eq!(producer.inputs(), vec!["original", "original", "original"]);
    }

    #[tokio::test]
    async fn test_empty_keywords_accept_any_non_empty() {
        let producer = ScriptedProducer::new(vec![ok("   "), ok("anything")]);
        let improver = CountingImprover::new();

        let outcome =
            validate_and_iterate(&producer, &improver, "task", &KeywordSet::empty(), 3).await;

        assert_eq!(outcome.output.as_deref(), Some("anything"));
        assert_eq!(outcome.attempts, 2);
    }

    #[tokio::test]
    async fn test_bounded_by_max_attempts() {
        let producer = ScriptedProducer::new(vec![failed(); 10]);
        let improver = CountingImprover::new();

        let outcome =
            validate_and_iterate(&producer, &improver, "task", &KeywordSet::code(), 5).await;

        assert_eq!(outcome.output, None);
        assert_eq!(producer.calls(), 5);
        assert_eq!(outcome.attempts, 5);
    }

    #[tokio::test]
    async fn test_zero_attempts_never_calls_producer() {
        let producer = ScriptedProducer::new(vec![ok("a report")]);
        let improver = CountingImprover::new();

        let outcome =
            validate_and_iterate(&producer, &improver, "task", &KeywordSet::analysis(), 0).await;

        assert_eq!(outcome.output, None);
        assert_eq!(producer.calls(), 0);
    }

    // ==================== CompletionImprover ====================

    struct FixedBackend {
        model: Model,
        reply: Result<String, CompletionError>,
        seen: Mutex<Vec<Vec<Message>>>,
    }

    #[async_trait]
    impl CompletionBackend for FixedBackend {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn complete(
            &self,
            messages: &[Message],
            _options: &CompletionOptions,
        ) -> Result<String, CompletionError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            self.reply.clone()
        }
    }

    fn improver_with(reply: Result<String, CompletionError>) -> (Arc<FixedBackend>, CompletionImprover) {
        let backend = Arc::new(FixedBackend {
            model: Model::default_planner(),
            reply,
            seen: Mutex::new(Vec::new()),
        });
        let improver = CompletionImprover::new(backend.clone(), None);
        (backend, improver)
    }

    #[tokio::test]
    async fn test_completion_improver_trims_rewrite() {
        let (backend, improver) = improver_with(Ok("  better task \n".to_string()));
        let result = improver.improve("task", "bad answer").await;
        assert_eq!(result.as_deref(), Some("better task"));

        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0][1].content.contains("bad answer"));
    }

    #[tokio::test]
    async fn test_completion_improver_empty_or_error_is_none() {
        let (_, improver) = improver_with(Ok("   ".to_string()));
        assert_eq!(improver.improve("task", "bad").await, None);

        let (_, improver) = improver_with(Err(CompletionError::Timeout));
        assert_eq!(improver.improve("task", "bad").await, None);
    }
}
