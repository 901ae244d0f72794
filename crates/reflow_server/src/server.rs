//! Router assembly and the serve loop.

use crate::state::AppState;
use crate::{config::ServerConfig, routes};
use axum::Json;
use axum::http::StatusCode;
use axum::routing::{get, post};
use reflow_error::{ServerError, ServerErrorKind, ServerResult};
use serde_json::json;
use tracing::info;

/// Liveness probe.
async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Builds the application router over the shared state.
pub fn create_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/api/generate", post(routes::generate))
        .route("/api/history", get(routes::history))
        .route("/api/usage", get(routes::usage))
        .route("/api/tier", get(routes::tier))
        .route("/api/webhooks/billing", post(routes::billing_webhook))
        .route("/health", get(health))
        .with_state(state)
}

/// Binds the listener and serves until shutdown.
///
/// # Errors
/// Returns `ServerError` if the bind address is unusable or the accept loop
/// fails.
pub async fn serve(config: &ServerConfig, state: AppState) -> ServerResult<()> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Startup(format!(
                "binding {}: {}",
                config.bind_addr, e
            )))
        })?;

    info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Startup(format!("serving: {}", e))))
}
