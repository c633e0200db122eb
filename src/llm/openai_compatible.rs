use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::interface::{CompletionInterface, LlmError, Message};
use crate::config::LlmConfig;

/// OpenAI compatible chat-completion client.
/// Issues one non-streaming request per call and reads the first choice.
pub struct OpenAICompatibleClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAICompatibleClient {
    pub fn new(config: &LlmConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            "Initialized OpenAICompatibleClient: model={}, base_url={}",
            config.model, config.base_url
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl CompletionInterface for OpenAICompatibleClient {
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
    ) -> Result<String, LlmError> {
        let mut request_messages = Vec::with_capacity(messages.len() + 1);

        if let Some(sys) = system {
            request_messages.push(Message {
                role: "system".to_string(),
                content: sys.to_string(),
            });
        }
        request_messages.extend(messages);

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: request_messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Request(format!("malformed completion response: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(LlmError::EmptyCompletion)
    }
}
