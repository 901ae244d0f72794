//! HTTP API for Reflow.
//!
//! Five endpoints over the generation pipeline and its policy gates:
//!
//! - `POST /api/generate` runs the full admission chain (identity, rate,
//!   quota, tier, validation) and then the two-stage pipeline
//! - `GET /api/history`, `GET /api/usage`, `GET /api/tier` are read views
//! - `POST /api/webhooks/billing` applies subscription changes
//!
//! Identity is delegated upstream: a verified external user id arrives in
//! the `x-user-id` header on every authenticated route.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod db;
mod failure;
mod identity;
mod routes;
mod server;
mod state;

pub use config::ServerConfig;
pub use failure::ApiFailure;
pub use server::{create_router, serve};
pub use state::AppState;
