//! HTTP client for a local Ollama server

use super::error::{OllamaError, Result};
use super::protocol::{ChatRequest, ChatResponse, ErrorResponse};
use async_trait::async_trait;
use conductor_application::{CompletionBackend, CompletionError};
use conductor_domain::{CompletionOptions, Message, Model};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Shared HTTP connection to one Ollama server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a client for `base_url` (e.g. `http://localhost:11434`).
    ///
    /// `request_timeout` bounds every HTTP request at the transport level.
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| OllamaError::Http(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    /// Non-streaming chat completion; returns the assistant message content
    pub async fn chat(
        &self,
        model: &Model,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String> {
        let url = self.chat_url();
        let request = ChatRequest::new(model.as_str(), messages, options);
        debug!(model = %model, messages = messages.len(), "POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(&self.base_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(OllamaError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| OllamaError::from_reqwest(&self.base_url, e))?;
        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| OllamaError::InvalidBody(e.to_string()))?;
        trace!(model = %model, "Ollama reply: {}", parsed.message.content);
        Ok(parsed.message.content)
    }
}

/// A [`CompletionBackend`] bound to one model on a shared [`OllamaClient`]
pub struct OllamaCompletionBackend {
    client: Arc<OllamaClient>,
    model: Model,
}

impl OllamaCompletionBackend {
    pub fn new(client: Arc<OllamaClient>, model: Model) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl CompletionBackend for OllamaCompletionBackend {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> std::result::Result<String, CompletionError> {
        self.client
            .chat(&self.model, messages, options)
            .await
            .map_err(CompletionError::from)
    }
}
