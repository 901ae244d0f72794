//! Generation pipeline: content analysis followed by parallel platform
//! generation.
//!
//! Stage 1 analyzes the input once; its failure is fatal to the request.
//! Stage 2 fans out one generation call per requested platform and never
//! fails the request: each platform's failure is recorded in its own
//! [`reflow_core::PlatformOutput`] slot.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod engine;
mod generator;
mod sanitize;

pub use engine::PromptEngine;
pub use sanitize::{
    MAX_CONTENT_LENGTH, MAX_PLATFORMS, MIN_CONTENT_LENGTH, prepare_request, sanitize_input,
    validate_request,
};
