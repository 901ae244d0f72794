//! Shared handler state.

use reflow_database::DbPool;
use reflow_pipeline::PromptEngine;
use reflow_policy::RateGate;
use std::sync::Arc;

/// State shared by every route handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the persistence layer
    pub pool: DbPool,
    /// The generation pipeline, holding the injected LLM driver
    pub engine: PromptEngine,
    /// The request rate gate
    pub rate_gate: Arc<RateGate>,
}
