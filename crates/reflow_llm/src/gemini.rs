//! Google Gemini client.

use crate::{LlmBackend, TextGenerator};
use async_trait::async_trait;
use reflow_core::{LlmConfig, LlmProvider, LlmResponse};
use reflow_error::{LlmError, LlmErrorKind, LlmResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Google Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiRequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiRequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    #[serde(default)]
    total_token_count: u32,
}

impl GeminiClient {
    /// Creates a new Gemini client with the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, GEMINI_DEFAULT_MODEL)
    }

    /// Creates a new Gemini client for a specific model.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new Gemini client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt, config), fields(model = %self.model))]
    async fn generate(&self, prompt: &str, config: &LlmConfig) -> LlmResult<LlmResponse> {
        debug!("Sending request to Gemini API");

        // Gemini has no separate system slot in this API shape; prepend it.
        let full_prompt = format!("{}\n\n{}", config.system_prompt, prompt);
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiRequestPart { text: &full_prompt }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_tokens,
                response_mime_type: "application/json",
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        );
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                LlmError::new(LlmErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(LlmError::new(LlmErrorKind::ApiError {
                status: status.as_u16(),
                message: body,
            }));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            LlmError::new(LlmErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let content = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                error!("Gemini response carried no text candidate");
                LlmError::new(LlmErrorKind::EmptyResponse(
                    "no text candidate in response".to_string(),
                ))
            })?;
        let tokens = gemini_response
            .usage_metadata
            .map(|usage| usage.total_token_count)
            .unwrap_or(0);

        debug!(tokens, "Received response from Gemini");
        Ok(LlmResponse {
            content,
            tokens,
            model: self.model.clone(),
            provider: LlmProvider::Gemini,
        })
    }
}

impl LlmBackend for GeminiClient {
    fn provider(&self) -> LlmProvider {
        LlmProvider::Gemini
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
