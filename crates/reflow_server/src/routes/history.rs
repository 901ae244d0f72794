//! `GET /api/history`: the caller's recent generation records.

use crate::db::with_conn;
use crate::failure::ApiFailure;
use crate::identity::require_user_id;
use crate::routes::load_user;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use reflow_database::{GenerationRepository, GenerationRow, PostgresGenerationRepository};
use serde_json::{Value, json};

fn history_entry(row: &GenerationRow) -> Result<Value, ApiFailure> {
    let outputs = row.platform_outputs()?;
    Ok(json!({
        "id": row.id,
        "createdAt": row.created_at,
        "completedAt": row.completed_at,
        "platforms": row.selected_platforms,
        "tone": row.selected_tone,
        "status": row.status,
        "coreMessage": row.core_message,
        "detectedTopic": row.detected_topic,
        "detectedAudience": row.detected_audience,
        "outputs": outputs,
        "totalTokensUsed": row.total_tokens_used,
        "generationTimeMs": row.generation_time_ms,
        "errorMessage": row.error_message,
    }))
}

/// Returns the caller's generation history, newest first.
pub(crate) async fn history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiFailure> {
    let external_id = require_user_id(&headers)?;
    let user = load_user(&state, &external_id).await?;

    let user_id = user.id;
    let rows = with_conn(&state.pool, move |conn| {
        PostgresGenerationRepository::new(conn)
            .history_for_user(user_id)
            .map_err(ApiFailure::from)
    })
    .await?;

    let generations = rows
        .iter()
        .map(history_entry)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(json!({ "generations": generations })))
}
