//! `GET /api/tier`: tier and trial standing for the caller.

use crate::failure::ApiFailure;
use crate::identity::require_user_id;
use crate::routes::load_user;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use chrono::Utc;
use reflow_core::TierStatus;
use reflow_policy::tier_status;

/// Returns the caller's tier, trial standing, and platform availability.
pub(crate) async fn tier(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TierStatus>, ApiFailure> {
    let external_id = require_user_id(&headers)?;
    let user = load_user(&state, &external_id).await?;
    let tier = user.tier()?;

    Ok(Json(tier_status(tier, user.created_at, Utc::now())))
}
