//! PostgreSQL persistence for Reflow.
//!
//! Diesel models, schema, and repositories for the four tables behind the
//! service: users, generations, usage_logs, and webhook_events. Repositories
//! follow a trait-per-aggregate shape so handlers can be tested against
//! in-memory fakes.
//!
//! The two usage counters on `users` are only ever touched with single
//! atomic statements: the monthly reset is a conditional update keyed on the
//! stored reset time, and the increment is a relative `count = count + 1`.
//! Concurrent requests therefore cannot double-reset or lose increments.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod generation_repository;
mod hash;
mod models;
pub mod schema;
mod usage_log_repository;
mod user_repository;
mod webhook_repository;

pub use connection::{DbPool, create_pool, establish_connection};
pub use generation_repository::{GenerationRepository, HISTORY_LIMIT, PostgresGenerationRepository};
pub use hash::content_hash;
pub use models::{
    GenerationRow, NewGenerationRow, NewUsageLogRow, NewWebhookEventRow, UpdateGenerationRow,
    UsageLogRow, UserRow, WebhookEventRow,
};
pub use usage_log_repository::{PostgresUsageLogRepository, UsageLogRepository};
pub use user_repository::{PostgresUserRepository, UserRepository};
pub use webhook_repository::{PostgresWebhookRepository, WebhookRepository};
