//! Anthropic messages client.

use crate::{LlmBackend, TextGenerator};
use async_trait::async_trait;
use reflow_core::{LlmConfig, LlmProvider, LlmResponse};
use reflow_error::{LlmError, LlmErrorKind, LlmResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const ANTHROPIC_DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
    usage: AnthropicUsage,
    model: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

impl AnthropicClient {
    /// Creates a new Anthropic client with the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, ANTHROPIC_DEFAULT_MODEL)
    }

    /// Creates a new Anthropic client for a specific model.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for AnthropicClient {
    #[instrument(skip(self, prompt, config), fields(model = %self.model))]
    async fn generate(&self, prompt: &str, config: &LlmConfig) -> LlmResult<LlmResponse> {
        debug!("Sending request to Anthropic API");

        let request = AnthropicRequest {
            model: &self.model,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            system: &config.system_prompt,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                LlmError::new(LlmErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(LlmError::new(LlmErrorKind::ApiError {
                status: status.as_u16(),
                message: body,
            }));
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            LlmError::new(LlmErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let content = anthropic_response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                LlmError::new(LlmErrorKind::EmptyResponse(
                    "no text block in response".to_string(),
                ))
            })?;

        // Anthropic reports input and output tokens separately.
        let tokens =
            anthropic_response.usage.input_tokens + anthropic_response.usage.output_tokens;

        debug!(tokens, "Received response from Anthropic");
        Ok(LlmResponse {
            content,
            tokens,
            model: anthropic_response.model,
            provider: LlmProvider::Anthropic,
        })
    }
}

impl LlmBackend for AnthropicClient {
    fn provider(&self) -> LlmProvider {
        LlmProvider::Anthropic
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
