//! LLM adapter call types.

use serde::{Deserialize, Serialize};

/// Vendor backend identity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LlmProvider {
    /// OpenAI chat completions
    OpenAi,
    /// Anthropic messages
    Anthropic,
    /// Google Gemini
    Gemini,
}

/// Per-call generation parameters.
///
/// # Examples
///
/// ```
/// use reflow_core::LlmConfig;
///
/// let config = LlmConfig::default();
/// assert_eq!(config.temperature, 0.7);
/// assert_eq!(config.max_tokens, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// System prompt for the call
    pub system_prompt: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
            system_prompt: "You are a helpful assistant.".to_string(),
        }
    }
}

/// One completed adapter call.
///
/// `tokens` is the vendor-normalized total: providers that report input and
/// output token counts separately have them summed before this struct is
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Raw response text (expected to be JSON)
    pub content: String,
    /// Total tokens consumed by the call
    pub tokens: u32,
    /// Vendor-reported model identifier
    pub model: String,
    /// Which backend produced this response
    pub provider: LlmProvider,
}
