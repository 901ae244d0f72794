//! LLM provider adapter for Reflow.
//!
//! Presents one operation, "generate text from a prompt and report token
//! usage," over three interchangeable vendor backends (OpenAI, Anthropic,
//! Google Gemini) with automatic cross-provider failover.
//!
//! The adapter is explicitly constructed ([`LlmRouter::from_env`]) at
//! process start and injected into callers by reference; there is no hidden
//! global client state. There is also no same-provider retry: the only
//! recovery from a vendor failure is trying the next configured vendor once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod driver;
mod gemini;
mod openai;
mod parse;
mod router;

pub use anthropic::AnthropicClient;
pub use driver::{LlmBackend, TextGenerator};
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use parse::parse_json;
pub use router::{LlmRouter, PROVIDER_PRECEDENCE};
