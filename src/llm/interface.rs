use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion request timed out")]
    Timeout,

    #[error("completion request failed: {0}")]
    Request(String),

    #[error("completion API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("completion API returned no usable completion")]
    EmptyCompletion,
}

/// Interface for a stateless completion backend.
/// Stateless means the backend keeps no memory between calls; every
/// request carries its full message list.
#[async_trait]
pub trait CompletionInterface: Send + Sync {
    /// Generate a single chat completion and return the text of the
    /// first response choice. No retries: callers see exactly one
    /// round trip per invocation.
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
    ) -> Result<String, LlmError>;
}
