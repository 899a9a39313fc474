//! Wire types for Ollama's `/api/chat` endpoint (non-streaming)

use conductor_domain::{CompletionOptions, Message};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub stream: bool,
    #[serde(skip_serializing_if = "ChatOptions::is_empty")]
    pub options: ChatOptions,
}

impl<'a> ChatRequest<'a> {
    pub fn new(model: &'a str, messages: &'a [Message], options: &CompletionOptions) -> Self {
        Self {
            model,
            messages: messages.iter().map(ChatMessage::from).collect(),
            stream: false,
            options: ChatOptions::from(options),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> From<&'a Message> for ChatMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            role: message.role.as_str(),
            content: &message.content,
        }
    }
}

/// Generation options; absent fields fall back to the model's defaults
#[derive(Debug, Default, Serialize)]
pub struct ChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ctx: Option<u32>,
}

impl ChatOptions {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.num_ctx.is_none()
    }
}

impl From<&CompletionOptions> for ChatOptions {
    fn from(options: &CompletionOptions) -> Self {
        Self {
            temperature: options.temperature,
            num_ctx: options.context_size,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub message: ResponseMessage,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: String,
}

/// Error body Ollama sends with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
