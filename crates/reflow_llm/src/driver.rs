//! Trait definitions for LLM backends.

use async_trait::async_trait;
use reflow_core::{LlmConfig, LlmProvider, LlmResponse};
use reflow_error::LlmResult;

/// Core trait for anything that can turn a prompt into text.
///
/// Implemented by every vendor client and by [`crate::LlmRouter`] itself, so
/// pipeline code can be written against the trait and tested with fakes.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the prompt under the given call parameters.
    async fn generate(&self, prompt: &str, config: &LlmConfig) -> LlmResult<LlmResponse>;
}

/// A concrete vendor backend with a fixed identity.
pub trait LlmBackend: TextGenerator {
    /// Which vendor this backend talks to.
    fn provider(&self) -> LlmProvider;

    /// Model identifier requested by this backend.
    fn model_name(&self) -> &str;
}
