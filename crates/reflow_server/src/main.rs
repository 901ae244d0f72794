//! Reflow API server binary.

use reflow_core::init_telemetry;
use reflow_database::create_pool;
use reflow_error::{ReflowResult, ServerError, ServerErrorKind};
use reflow_llm::LlmRouter;
use reflow_pipeline::PromptEngine;
use reflow_policy::RateGate;
use reflow_server::{AppState, ServerConfig, serve};
use std::sync::Arc;

#[tokio::main]
async fn main() -> ReflowResult<()> {
    dotenvy::dotenv().ok();
    init_telemetry()
        .map_err(|e| ServerError::new(ServerErrorKind::Startup(format!("telemetry: {}", e))))?;

    let config = ServerConfig::from_env()?;
    let pool = create_pool(&config.database_url)?;
    let router = LlmRouter::from_env()?;
    let engine = PromptEngine::new(Arc::new(router));
    let rate_gate = Arc::new(RateGate::from_env()?);

    let state = AppState {
        pool,
        engine,
        rate_gate,
    };

    serve(&config, state).await?;
    Ok(())
}
