//! Provider failover router.

use crate::{AnthropicClient, GeminiClient, LlmBackend, OpenAiClient, TextGenerator};
use async_trait::async_trait;
use reflow_core::{LlmConfig, LlmProvider, LlmResponse};
use reflow_error::{LlmError, LlmErrorKind, LlmResult};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Fixed fallback order when the preferred provider cannot serve a call.
pub const PROVIDER_PRECEDENCE: [LlmProvider; 3] = [
    LlmProvider::OpenAi,
    LlmProvider::Anthropic,
    LlmProvider::Gemini,
];

/// Routes generation calls across the configured vendor backends.
///
/// The preferred provider is tried first. If it is not configured or fails at
/// call time, every other configured backend is tried once in
/// [`PROVIDER_PRECEDENCE`] order. When all backends fail, the error from the
/// last attempt is returned.
///
/// The router is built once at startup and shared by reference. It holds no
/// per-call state and no global singletons.
pub struct LlmRouter {
    backends: Vec<Arc<dyn LlmBackend>>,
    preferred: LlmProvider,
}

impl std::fmt::Debug for LlmRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmRouter")
            .field("preferred", &self.preferred)
            .field("configured", &self.configured_providers())
            .finish()
    }
}

impl LlmRouter {
    /// Builds a router from an explicit backend set.
    ///
    /// Fails with `NoProviderConfigured` when `backends` is empty, so a
    /// misconfigured deployment is rejected at startup rather than on the
    /// first request.
    pub fn new(backends: Vec<Arc<dyn LlmBackend>>, preferred: LlmProvider) -> LlmResult<Self> {
        if backends.is_empty() {
            return Err(LlmError::new(LlmErrorKind::NoProviderConfigured));
        }
        Ok(Self {
            backends,
            preferred,
        })
    }

    /// Builds a router from environment credentials.
    ///
    /// Reads `OPENAI_API_KEY`, `ANTHROPIC_API_KEY`, and `GOOGLE_API_KEY` and
    /// constructs a backend for each key present. `LLM_PROVIDER` selects the
    /// preferred provider; unset or unrecognized values fall back to OpenAI.
    pub fn from_env() -> LlmResult<Self> {
        let preferred = std::env::var("LLM_PROVIDER")
            .ok()
            .and_then(|raw| raw.parse::<LlmProvider>().ok())
            .unwrap_or(LlmProvider::OpenAi);

        let mut backends: Vec<Arc<dyn LlmBackend>> = Vec::new();
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            backends.push(Arc::new(OpenAiClient::new(key)));
        }
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            backends.push(Arc::new(AnthropicClient::new(key)));
        }
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            backends.push(Arc::new(GeminiClient::new(key)));
        }

        let router = Self::new(backends, preferred)?;
        info!(
            preferred = %router.preferred,
            configured = ?router.configured_providers(),
            "LLM router ready"
        );
        Ok(router)
    }

    /// The provider tried first for every call.
    pub fn preferred(&self) -> LlmProvider {
        self.preferred
    }

    /// Providers with a constructed backend, in precedence order.
    pub fn configured_providers(&self) -> Vec<LlmProvider> {
        PROVIDER_PRECEDENCE
            .into_iter()
            .filter(|provider| self.backend_for(*provider).is_some())
            .collect()
    }

    fn backend_for(&self, provider: LlmProvider) -> Option<&Arc<dyn LlmBackend>> {
        self.backends
            .iter()
            .find(|backend| backend.provider() == provider)
    }
}

#[async_trait]
impl TextGenerator for LlmRouter {
    #[instrument(skip(self, prompt, config))]
    async fn generate(&self, prompt: &str, config: &LlmConfig) -> LlmResult<LlmResponse> {
        let mut last_err: Option<LlmError> = None;

        match self.backend_for(self.preferred) {
            Some(backend) => {
                debug!(provider = %self.preferred, "Trying preferred provider");
                match backend.generate(prompt, config).await {
                    Ok(response) => return Ok(response),
                    Err(e) => {
                        error!(provider = %self.preferred, error = %e, "Preferred provider failed");
                        last_err = Some(e);
                    }
                }
            }
            None => {
                warn!(provider = %self.preferred, "Preferred provider not configured");
            }
        }

        for provider in PROVIDER_PRECEDENCE {
            if provider == self.preferred {
                continue;
            }
            let Some(backend) = self.backend_for(provider) else {
                continue;
            };
            warn!(provider = %provider, "Falling back to alternate provider");
            match backend.generate(prompt, config).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    error!(provider = %provider, error = %e, "Fallback provider failed");
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| LlmError::new(LlmErrorKind::NoProviderConfigured)))
    }
}
