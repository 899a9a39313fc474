//! Code specialist

use crate::ports::completion::CompletionBackend;
use crate::ports::specialist::{AgentError, SpecialistAgent};
use crate::use_cases::shared::{complete_within, system_and_user};
use async_trait::async_trait;
use conductor_domain::{AgentPromptTemplate, CompletionOptions, Specialist};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Produces code in a single low-temperature completion
pub struct CodeAgent {
    backend: Arc<dyn CompletionBackend>,
    call_timeout: Option<Duration>,
}

impl CodeAgent {
    pub fn new(backend: Arc<dyn CompletionBackend>, call_timeout: Option<Duration>) -> Self {
        Self {
            backend,
            call_timeout,
        }
    }
}

#[async_trait]
impl SpecialistAgent for CodeAgent {
    fn kind(&self) -> Specialist {
        Specialist::Code
    }

    async fn run(&self, input: &str) -> Result<String, AgentError> {
        debug!(model = %self.backend.model(), "Code agent running");
        let messages = system_and_user(AgentPromptTemplate::coder_system(), input);
        let output = complete_within(
            self.backend.as_ref(),
            &messages,
            &CompletionOptions::precise_code(),
            self.call_timeout,
        )
        .await?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion::CompletionError;
    use conductor_domain::{Message, Model, Role};
    use std::sync::Mutex;

    struct RecordingBackend {
        model: Model,
        reply: Result<String, CompletionError>,
        calls: Mutex<Vec<(Vec<Message>, CompletionOptions)>>,
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn complete(
            &self,
            messages: &[Message],
            options: &CompletionOptions,
        ) -> Result<String, CompletionError> {
            self.calls
                .lock()
                .unwrap()
                .push((messages.to_vec(), *options));
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_uses_precise_options_and_system_prompt() {
        let backend = Arc::new(RecordingBackend {
            model: Model::default_coder(),
            reply: Ok("```python\nprint(1)\n```".to_string()),
            calls: Mutex::new(Vec::new()),
        });
        let agent = CodeAgent::new(backend.clone(), None);

        let output = agent.run("print one").await.unwrap();
        assert!(output.contains("print(1)"));

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (messages, options) = &calls[0];
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("Senior Software Engineer"));
        assert_eq!(messages[1].content, "print one");
        assert_eq!(options.temperature, Some(0.2));
        assert_eq!(options.context_size, Some(8192));
    }

    #[tokio::test]
    async fn test_backend_failure_is_agent_error() {
        let backend = Arc::new(RecordingBackend {
            model: Model::default_coder(),
            reply: Err(CompletionError::BackendError("500".to_string())),
            calls: Mutex::new(Vec::new()),
        });
        let agent = CodeAgent::new(backend, None);

        let err = agent.run("x").await.unwrap_err();
        assert_eq!(
            err,
            AgentError::Completion(CompletionError::BackendError("500".to_string()))
        );
    }
}
