//! `GET /api/usage`: quota counters for the caller.

use crate::failure::ApiFailure;
use crate::identity::require_user_id;
use crate::routes::load_user;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use chrono::Utc;
use reflow_policy::{UsageSnapshot, check_quota};
use serde_json::{Value, json};

/// Returns the caller's usage counters for the current month.
///
/// The figures come through the quota check, so a lapsed window reads as
/// zero used even before any write has rolled the stored counters over.
pub(crate) async fn usage(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiFailure> {
    let external_id = require_user_id(&headers)?;
    let user = load_user(&state, &external_id).await?;

    let snapshot = UsageSnapshot {
        used: user.generations_count_current_month,
        limit: user.generations_limit,
        resets_at: user.usage_reset_at,
    };
    let quota =
        check_quota(&snapshot, Utc::now()).map_err(|e| ApiFailure::Internal(e.to_string()))?;

    let percentage_used =
        ((f64::from(quota.used) / f64::from(quota.limit)) * 100.0).round() as i32;

    Ok(Json(json!({
        "used": quota.used,
        "limit": quota.limit,
        "remaining": quota.remaining,
        "percentageUsed": percentage_used,
        "tier": user.subscription_tier,
        "lastUsedAt": user.last_generation_at,
        "resetsAt": quota.resets_at,
    })))
}
