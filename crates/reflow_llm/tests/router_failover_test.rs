//! Failover behavior of the provider router.

use async_trait::async_trait;
use reflow_core::{LlmConfig, LlmProvider, LlmResponse};
use reflow_error::{LlmError, LlmErrorKind, LlmResult};
use reflow_llm::{LlmBackend, LlmRouter, TextGenerator};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct FakeBackend {
    provider: LlmProvider,
    fail: bool,
    calls: AtomicUsize,
}

impl FakeBackend {
    fn ok(provider: LlmProvider) -> Arc<Self> {
        Arc::new(Self {
            provider,
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(provider: LlmProvider) -> Arc<Self> {
        Arc::new(Self {
            provider,
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for FakeBackend {
    async fn generate(&self, _prompt: &str, _config: &LlmConfig) -> LlmResult<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LlmError::new(LlmErrorKind::ApiError {
                status: 500,
                message: format!("{} is down", self.provider),
            }));
        }
        Ok(LlmResponse {
            content: format!(r#"{{"from": "{}"}}"#, self.provider),
            tokens: 10,
            model: format!("{}-model", self.provider),
            provider: self.provider,
        })
    }
}

impl LlmBackend for FakeBackend {
    fn provider(&self) -> LlmProvider {
        self.provider
    }

    fn model_name(&self) -> &str {
        "fake"
    }
}

fn backends(list: &[&Arc<FakeBackend>]) -> Vec<Arc<dyn LlmBackend>> {
    list.iter()
        .map(|backend| Arc::clone(backend) as Arc<dyn LlmBackend>)
        .collect()
}

#[tokio::test]
async fn preferred_provider_serves_the_call() {
    let openai = FakeBackend::ok(LlmProvider::OpenAi);
    let anthropic = FakeBackend::ok(LlmProvider::Anthropic);
    let router =
        LlmRouter::new(backends(&[&openai, &anthropic]), LlmProvider::OpenAi).unwrap();

    let response = router.generate("prompt", &LlmConfig::default()).await.unwrap();

    assert_eq!(response.provider, LlmProvider::OpenAi);
    assert_eq!(openai.call_count(), 1);
    assert_eq!(anthropic.call_count(), 0);
}

#[tokio::test]
async fn unconfigured_preferred_falls_through_to_next_in_precedence() {
    let anthropic = FakeBackend::ok(LlmProvider::Anthropic);
    let gemini = FakeBackend::ok(LlmProvider::Gemini);
    let router =
        LlmRouter::new(backends(&[&gemini, &anthropic]), LlmProvider::OpenAi).unwrap();

    let response = router.generate("prompt", &LlmConfig::default()).await.unwrap();

    // Anthropic precedes Gemini in the fallback order.
    assert_eq!(response.provider, LlmProvider::Anthropic);
    assert_eq!(anthropic.call_count(), 1);
    assert_eq!(gemini.call_count(), 0);
}

#[tokio::test]
async fn runtime_failure_triggers_single_attempt_failover() {
    let openai = FakeBackend::failing(LlmProvider::OpenAi);
    let anthropic = FakeBackend::ok(LlmProvider::Anthropic);
    let router =
        LlmRouter::new(backends(&[&openai, &anthropic]), LlmProvider::OpenAi).unwrap();

    let response = router.generate("prompt", &LlmConfig::default()).await.unwrap();

    assert_eq!(response.provider, LlmProvider::Anthropic);
    assert_eq!(openai.call_count(), 1);
    assert_eq!(anthropic.call_count(), 1);
}

#[tokio::test]
async fn all_backends_failing_returns_last_error() {
    let openai = FakeBackend::failing(LlmProvider::OpenAi);
    let gemini = FakeBackend::failing(LlmProvider::Gemini);
    let router = LlmRouter::new(backends(&[&openai, &gemini]), LlmProvider::OpenAi).unwrap();

    let err = router
        .generate("prompt", &LlmConfig::default())
        .await
        .unwrap_err();

    // Gemini is the last attempt, so its error is the one reported.
    match err.kind() {
        LlmErrorKind::ApiError { message, .. } => assert!(message.contains("gemini")),
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(openai.call_count(), 1);
    assert_eq!(gemini.call_count(), 1);
}

#[tokio::test]
async fn each_backend_is_tried_at_most_once() {
    let openai = FakeBackend::failing(LlmProvider::OpenAi);
    let anthropic = FakeBackend::failing(LlmProvider::Anthropic);
    let gemini = FakeBackend::failing(LlmProvider::Gemini);
    let router = LlmRouter::new(
        backends(&[&openai, &anthropic, &gemini]),
        LlmProvider::Anthropic,
    )
    .unwrap();

    let _ = router.generate("prompt", &LlmConfig::default()).await;

    assert_eq!(openai.call_count(), 1);
    assert_eq!(anthropic.call_count(), 1);
    assert_eq!(gemini.call_count(), 1);
}

#[test]
fn empty_backend_set_is_rejected_at_construction() {
    let err = LlmRouter::new(Vec::new(), LlmProvider::OpenAi).unwrap_err();
    assert_eq!(err.kind(), &LlmErrorKind::NoProviderConfigured);
}

#[test]
fn configured_providers_follow_precedence_order() {
    let gemini = FakeBackend::ok(LlmProvider::Gemini);
    let openai = FakeBackend::ok(LlmProvider::OpenAi);
    let router =
        LlmRouter::new(backends(&[&gemini, &openai]), LlmProvider::Gemini).unwrap();

    assert_eq!(
        router.configured_providers(),
        vec![LlmProvider::OpenAi, LlmProvider::Gemini]
    );
}
