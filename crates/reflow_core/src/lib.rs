//! Core data types for the Reflow content repurposing service.
//!
//! This crate provides the foundation data types shared by the prompt store,
//! the LLM adapter, the policy gate, the pipeline, and the HTTP surface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod content;
mod llm;
mod output;
mod platform;
mod request;
mod result;
mod status;
mod telemetry;
mod tier;
mod tone;

pub use analysis::{AnalyzedTone, ContentAnalysis, ContentType};
pub use content::{
    EmailContent, EmailCta, EmailSection, InstagramContent, LinkedInContent, PlatformContent,
    TalkingPoint, ThreadsContent, TikTokContent, TwitterContent,
};
pub use llm::{LlmConfig, LlmProvider, LlmResponse};
pub use output::PlatformOutput;
pub use platform::Platform;
pub use request::GenerationRequest;
pub use result::GenerationResult;
pub use status::GenerationStatus;
pub use telemetry::init_telemetry;
pub use tier::{Tier, TierStatus};
pub use tone::Tone;
