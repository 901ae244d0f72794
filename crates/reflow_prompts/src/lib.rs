//! Prompt template store for the Reflow generation pipeline.
//!
//! Pure data plus string substitution: one content-analysis prompt and one
//! generation prompt per platform x tone pair (6 platforms x 4 tones). The
//! lookup is a total function over the closed enums; there is no fallback
//! template.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod email;
mod instagram;
mod linkedin;
mod template;
mod threads;
mod tiktok;
mod twitter;

pub use analyzer::CONTENT_ANALYZER_PROMPT;
pub use template::{fill_analysis_prompt, fill_platform_prompt, prompt_for, render_key_points};
