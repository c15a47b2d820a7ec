//! Anthropic Messages API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use url::Url;

use crate::domain::chat_provider::ChatProvider;
use crate::domain::entities::{ChatMessage, ChatPrompt};
use crate::error::AppError;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Connection settings for [`AnthropicClient`].
#[derive(Debug, Clone)]
pub struct AnthropicSettings {
    pub api_key: String,
    pub base_url: Url,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// [`ChatProvider`] backed by `POST {base_url}/v1/messages`.
pub struct AnthropicClient {
    client: Client,
    endpoint: Url,
    settings: AnthropicSettings,
}

impl AnthropicClient {
    /// Builds the HTTP client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the endpoint URL cannot be derived or
    /// the TLS backend fails to initialize.
    pub fn new(settings: AnthropicSettings) -> Result<Self, AppError> {
        let endpoint = settings.base_url.join("v1/messages").map_err(|e| {
            AppError::internal(
                "Invalid LLM base URL",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| {
                AppError::internal(
                    "Failed to build HTTP client",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        Ok(Self {
            client,
            endpoint,
            settings,
        })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }
}

#[async_trait]
impl ChatProvider for AnthropicClient {
    async fn complete(&self, prompt: ChatPrompt) -> Result<String, AppError> {
        let body = MessagesRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            system: &prompt.system,
            messages: &prompt.messages,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Chat provider request failed");
                AppError::upstream(
                    "AI service is temporarily unavailable",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %text, "Chat provider returned an error");
            return Err(AppError::upstream(
                "AI service is temporarily unavailable",
                json!({ "status": status.as_u16() }),
            ));
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            AppError::upstream(
                "AI service returned an unreadable response",
                json!({ "reason": e.to_string() }),
            )
        })?;

        parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                AppError::upstream("AI service returned no text", serde_json::Value::Null)
            })
    }
}
