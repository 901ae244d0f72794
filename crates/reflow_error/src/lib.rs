//! Error types for the Reflow content repurposing service.
//!
//! This crate provides the foundation error types used throughout the Reflow
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use reflow_error::{ConfigError, ReflowResult};
//!
//! fn load_setting() -> ReflowResult<String> {
//!     Err(ConfigError::new("Missing LLM_PROVIDER"))?
//! }
//!
//! match load_setting() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod http;
mod json;
mod llm;
mod pipeline;
mod policy;
mod server;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind, DatabaseResult};
pub use error::{ReflowError, ReflowErrorKind, ReflowResult};
pub use http::HttpError;
pub use json::JsonError;
pub use llm::{LlmError, LlmErrorKind, LlmResult};
pub use pipeline::{PipelineError, PipelineErrorKind, PipelineResult};
pub use policy::{PolicyError, PolicyErrorKind, PolicyResult};
pub use server::{ServerError, ServerErrorKind, ServerResult};
