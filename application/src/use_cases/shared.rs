//! Shared utilities for use cases.
//!
//! Contains the time-bounded completion helper used by the orchestrator,
//! the input improver and both specialist agents.

use crate::ports::completion::{CompletionBackend, CompletionError};
use conductor_domain::{CompletionOptions, Message};
use std::time::Duration;

/// Bytes of model output included in debug logs
pub(crate) const LOG_PREVIEW_BYTES: usize = 200;

/// Request a completion, failing with [`CompletionError::Timeout`] once
/// `timeout` elapses.
///
/// `None` leaves the call unbounded.
pub(crate) async fn complete_within(
    backend: &dyn CompletionBackend,
    messages: &[Message],
    options: &CompletionOptions,
    timeout: Option<Duration>,
) -> Result<String, CompletionError> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, backend.complete(messages, options))
            .await
            .map_err(|_| CompletionError::Timeout)?,
        None => backend.complete(messages, options).await,
    }
}

/// Convenience for the common system + user exchange.
pub(crate) fn system_and_user(system: &str, user: impl Into<String>) -> Vec<Message> {
    vec![Message::system(system), Message::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use conductor_domain::Model;

    struct SlowBackend {
        model: Model,
        delay: Duration,
    }

    #[async_trait]
    impl CompletionBackend for SlowBackend {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn complete(
            &self,
            _messages: &[Message],
            _options: &CompletionOptions,
        ) -> Result<String, CompletionError> {
            tokio::time::sleep(self.delay).await;
            Ok("done".to_string())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_expires() {
        let backend = SlowBackend {
            model: Model::default(),
            delay: Duration::from_secs(300),
        };
        let result = complete_within(
            &backend,
            &[Message::user("hi")],
            &CompletionOptions::default(),
            Some(Duration::from_secs(120)),
        )
        .await;
        assert_eq!(result, Err(CompletionError::Timeout));
    }

    #[tokio::test(start_paused = true)]
    async fn test_completes_within_limit() {
        let backend = SlowBackend {
            model: Model::default(),
            delay: Duration::from_secs(1),
        };
        let result = complete_within(
            &backend,
            &[Message::user("hi")],
            &CompletionOptions::default(),
            Some(Duration::from_secs(120)),
        )
        .await;
        assert_eq!(result, Ok("done".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_timeout_waits() {
        let backend = SlowBackend {
            model: Model::default(),
            delay: Duration::from_secs(600),
        };
        let result = complete_within(
            &backend,
            &[Message::user("hi")],
            &CompletionOptions::default(),
            None,
        )
        .await;
        assert!(result.is_ok());
    }
}
