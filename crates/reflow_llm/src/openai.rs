//! OpenAI chat completions client.

use crate::{LlmBackend, TextGenerator};
use async_trait::async_trait;
use reflow_core::{LlmConfig, LlmProvider, LlmResponse};
use reflow_error::{LlmError, LlmErrorKind, LlmResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4-turbo-preview";

/// OpenAI API client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    total_tokens: u32,
}

impl OpenAiClient {
    /// Creates a new OpenAI client with the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, OPENAI_DEFAULT_MODEL)
    }

    /// Creates a new OpenAI client for a specific model.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new OpenAI client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    #[instrument(skip(self, prompt, config), fields(model = %self.model))]
    async fn generate(&self, prompt: &str, config: &LlmConfig) -> LlmResult<LlmResponse> {
        debug!("Sending request to OpenAI API");

        let request = OpenAiRequest {
            model: &self.model,
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: &config.system_prompt,
                },
                OpenAiMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI API");
                LlmError::new(LlmErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI API returned error");
            return Err(LlmError::new(LlmErrorKind::ApiError {
                status: status.as_u16(),
                message: body,
            }));
        }

        let openai_response: OpenAiResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            LlmError::new(LlmErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let content = openai_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                LlmError::new(LlmErrorKind::EmptyResponse(
                    "no message content in first choice".to_string(),
                ))
            })?;
        let tokens = openai_response
            .usage
            .map(|usage| usage.total_tokens)
            .unwrap_or(0);

        debug!(tokens, "Received response from OpenAI");
        Ok(LlmResponse {
            content,
            tokens,
            model: openai_response.model,
            provider: LlmProvider::OpenAi,
        })
    }
}

impl LlmBackend for OpenAiClient {
    fn provider(&self) -> LlmProvider {
        LlmProvider::OpenAi
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
