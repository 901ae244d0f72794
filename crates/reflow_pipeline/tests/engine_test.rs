//! Orchestration behavior of the two-stage pipeline.

use async_trait::async_trait;
use reflow_core::{
    GenerationRequest, LlmConfig, LlmProvider, LlmResponse, Platform, PlatformContent, Tone,
};
use reflow_error::{LlmError, LlmErrorKind, LlmResult, PipelineErrorKind};
use reflow_llm::TextGenerator;
use reflow_pipeline::PromptEngine;
use std::sync::Arc;

const ANALYSIS_JSON: &str = r#"{
    "coreMessage": "Ship smaller changes more often",
    "keyPoints": ["Small batches reduce risk", "Feedback arrives sooner", "Rollbacks stay cheap"],
    "topic": "Software delivery",
    "audience": "Engineering leads",
    "contentType": "blog",
    "tone": "professional"
}"#;

const TWITTER_JSON: &str = r##"{
    "thread": ["Hook tweet", "Second tweet"],
    "tweetCount": 2,
    "hashtags": ["#shipping"],
    "engagementTip": "Reply to early commenters"
}"##;

const LINKEDIN_JSON: &str = r##"{
    "hook": "Most teams ship too rarely.",
    "post": "Full post body",
    "keyTakeaways": ["Smaller is safer"],
    "cta": "How often does your team ship?",
    "hashtags": ["#engineering"],
    "characterCount": 64
}"##;

const THREADS_JSON: &str = r#"{
    "posts": ["First post", "Second post"],
    "postCount": 2,
    "hashtags": [],
    "engagementTip": "Post at commute time"
}"#;

/// What the fake driver does when a call's system prompt matches a keyword.
enum Script {
    Json(&'static str, u32),
    Fail,
    Prose,
}

/// Dispatches on the system prompt, which names the call's role: the
/// analysis call says "content analysis expert" and each platform call
/// names its platform.
struct ScriptedDriver {
    scripts: Vec<(&'static str, Script)>,
}

#[async_trait]
impl TextGenerator for ScriptedDriver {
    async fn generate(&self, _prompt: &str, config: &LlmConfig) -> LlmResult<LlmResponse> {
        let (_, script) = self
            .scripts
            .iter()
            .find(|(keyword, _)| config.system_prompt.contains(keyword))
            .unwrap_or_else(|| panic!("unscripted call: {}", config.system_prompt));
        match script {
            Script::Json(body, tokens) => Ok(LlmResponse {
                content: (*body).to_string(),
                tokens: *tokens,
                model: "fake-model".to_string(),
                provider: LlmProvider::Anthropic,
            }),
            Script::Fail => Err(LlmError::new(LlmErrorKind::ApiError {
                status: 500,
                message: "scripted failure".to_string(),
            })),
            Script::Prose => Ok(LlmResponse {
                content: "Sure! Here is your content:".to_string(),
                tokens: 0,
                model: "fake-model".to_string(),
                provider: LlmProvider::Anthropic,
            }),
        }
    }
}

fn engine(scripts: Vec<(&'static str, Script)>) -> PromptEngine {
    PromptEngine::new(Arc::new(ScriptedDriver { scripts }))
}

fn request(platforms: Vec<Platform>) -> GenerationRequest {
    GenerationRequest {
        content: "Long-form input content about shipping software in small batches.".to_string(),
        platforms,
        tone: Tone::Educational,
    }
}

#[tokio::test]
async fn outputs_preserve_request_order() {
    let engine = engine(vec![
        ("content analysis", Script::Json(ANALYSIS_JSON, 500)),
        ("twitter", Script::Json(TWITTER_JSON, 800)),
        ("linkedin", Script::Json(LINKEDIN_JSON, 900)),
        ("threads", Script::Json(THREADS_JSON, 400)),
    ]);
    let request = request(vec![Platform::LinkedIn, Platform::Threads, Platform::Twitter]);

    let result = engine.generate(&request).await.unwrap();

    let platforms: Vec<Platform> = result.outputs.iter().map(|o| o.platform).collect();
    assert_eq!(
        platforms,
        vec![Platform::LinkedIn, Platform::Threads, Platform::Twitter]
    );
    assert!(matches!(
        result.outputs[0].content,
        Some(PlatformContent::LinkedIn(_))
    ));
    assert!(matches!(
        result.outputs[2].content,
        Some(PlatformContent::Twitter(_))
    ));
}

#[tokio::test]
async fn analysis_failure_is_fatal() {
    let engine = engine(vec![
        ("content analysis", Script::Fail),
        ("twitter", Script::Json(TWITTER_JSON, 800)),
    ]);
    let request = request(vec![Platform::Twitter]);

    let err = engine.generate(&request).await.unwrap_err();
    assert!(matches!(err.kind(), PipelineErrorKind::Analysis(_)));
}

#[tokio::test]
async fn unparseable_analysis_is_fatal() {
    let engine = engine(vec![("content analysis", Script::Prose)]);
    let request = request(vec![Platform::Twitter]);

    let err = engine.generate(&request).await.unwrap_err();
    match err.kind() {
        PipelineErrorKind::Analysis(inner) => assert!(inner.is_invalid_output()),
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn single_platform_failure_is_contained() {
    let engine = engine(vec![
        ("content analysis", Script::Json(ANALYSIS_JSON, 500)),
        ("twitter", Script::Json(TWITTER_JSON, 800)),
        ("threads", Script::Fail),
    ]);
    let request = request(vec![Platform::Twitter, Platform::Threads]);

    let result = engine.generate(&request).await.unwrap();

    assert_eq!(result.outputs.len(), 2);
    assert!(!result.outputs[0].is_error());
    assert!(result.outputs[1].is_error());
    assert_eq!(result.outputs[1].platform, Platform::Threads);
    assert!(result.outputs[1].content.is_none());
}

#[tokio::test]
async fn unparseable_platform_output_is_contained() {
    let engine = engine(vec![
        ("content analysis", Script::Json(ANALYSIS_JSON, 500)),
        ("linkedin", Script::Prose),
    ]);
    let request = request(vec![Platform::LinkedIn]);

    let result = engine.generate(&request).await.unwrap();

    assert!(result.outputs[0].is_error());
    let message = result.outputs[0].error.as_deref().unwrap_or_default();
    assert!(message.contains("invalid JSON"));
}

#[tokio::test]
async fn failed_platforms_contribute_zero_tokens() {
    let engine = engine(vec![
        ("content analysis", Script::Json(ANALYSIS_JSON, 500)),
        ("twitter", Script::Json(TWITTER_JSON, 800)),
        ("linkedin", Script::Json(LINKEDIN_JSON, 900)),
        ("threads", Script::Fail),
    ]);
    let request = request(vec![Platform::Twitter, Platform::LinkedIn, Platform::Threads]);

    let result = engine.generate(&request).await.unwrap();

    assert_eq!(result.total_tokens, 2200);
    assert_eq!(result.llm_provider, "anthropic");
    assert_eq!(result.llm_model, "fake-model");
}
