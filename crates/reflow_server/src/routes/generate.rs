//! `POST /api/generate`: the admission chain and the pipeline run.

use crate::db::with_conn;
use crate::failure::ApiFailure;
use crate::identity::{client_ip, require_user_id};
use crate::routes::load_user;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;
use chrono::Utc;
use reflow_core::{Platform, Tone};
use reflow_database::{
    GenerationRepository, NewGenerationRow, NewUsageLogRow, PostgresGenerationRepository,
    PostgresUsageLogRepository, PostgresUserRepository, UpdateGenerationRow, UsageLogRepository,
    UserRepository, content_hash,
};
use reflow_policy::{UsageSnapshot, check_platform_access, check_quota};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info, instrument, warn};

/// Request body for a generation.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateBody {
    content: String,
    platforms: Vec<Platform>,
    tone: Tone,
}

/// Rough spend estimate in cents for a token total.
fn estimated_cost_cents(tokens: u32) -> i32 {
    (f64::from(tokens) * 0.002).ceil() as i32
}

/// Runs one generation end to end.
///
/// The admission chain runs in a fixed order so the cheapest denials come
/// first: identity, account, rate counters, body shape, quota, tier access,
/// content validation. Only an admitted request reaches the pipeline or
/// writes a generation record.
#[instrument(skip_all)]
pub(crate) async fn generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Json<Value>, ApiFailure> {
    let external_id = require_user_id(&headers)?;
    let ip = client_ip(&headers);
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let user = load_user(&state, &external_id).await?;

    let rate = state.rate_gate.check(&external_id, &ip);
    if !rate.allowed {
        warn!(user_id = %user.id, scope = ?rate.scope, "Rate limit tripped");
        return Err(ApiFailure::RateLimited(rate));
    }

    let Json(body) = body.map_err(|rejection| ApiFailure::Validation(rejection.body_text()))?;

    let now = Utc::now();
    let snapshot = UsageSnapshot {
        used: user.generations_count_current_month,
        limit: user.generations_limit,
        resets_at: user.usage_reset_at,
    };
    let quota = check_quota(&snapshot, now).map_err(|e| ApiFailure::Internal(e.to_string()))?;
    if quota.reset_due {
        let user_id = user.id;
        let resets_at = quota.resets_at;
        with_conn(&state.pool, move |conn| {
            PostgresUserRepository::new(conn)
                .reset_usage_if_lapsed(user_id, now, resets_at)
                .map_err(ApiFailure::from)
        })
        .await?;
    }
    if !quota.allowed {
        return Err(ApiFailure::QuotaExceeded(quota));
    }

    let tier = user.tier()?;
    let access = check_platform_access(&body.platforms, tier, user.created_at, now);
    if !access.allowed {
        return Err(ApiFailure::TierDenied {
            denied: access.denied,
            tier,
        });
    }

    let request = reflow_pipeline::prepare_request(&body.content, body.platforms, body.tone)
        .map_err(|e| ApiFailure::Validation(e.to_string()))?;

    let hash = content_hash(&request.content);
    let new_row = NewGenerationRow::pending(user.id, &request, hash);
    let pending = with_conn(&state.pool, move |conn| {
        PostgresGenerationRepository::new(conn)
            .start_generation(new_row)
            .map_err(ApiFailure::from)
    })
    .await?;

    let platform_names: Vec<String> = request.platforms.iter().map(|p| p.to_string()).collect();
    let platform_count = platform_names.len() as i32;

    match state.engine.generate(&request).await {
        Ok(result) => {
            let settled_at = Utc::now();
            let update = UpdateGenerationRow::completed(&result, settled_at)?;
            let response = json!({
                "success": true,
                "generationId": pending.id,
                "analysis": result.analysis,
                "outputs": result.outputs,
                "metadata": {
                    "generationTimeMs": result.generation_time_ms,
                    "tokensUsed": result.total_tokens,
                    "quotaRemaining": quota.remaining - 1,
                },
            });
            let log_row = NewUsageLogRow {
                user_id: user.id,
                generation_id: Some(pending.id),
                event_type: "generation_completed".to_string(),
                platform_count,
                platforms: Some(platform_names),
                tokens_used: Some(result.total_tokens as i32),
                estimated_cost_cents: Some(estimated_cost_cents(result.total_tokens)),
                user_agent,
                ip_address: Some(ip),
            };
            let user_id = user.id;
            let generation_id = pending.id;
            with_conn(&state.pool, move |conn| {
                PostgresGenerationRepository::new(conn)
                    .settle_generation(generation_id, update)?;
                PostgresUserRepository::new(conn).increment_usage(user_id, settled_at)?;
                PostgresUsageLogRepository::new(conn).log_event(log_row)?;
                Ok(())
            })
            .await?;

            info!(
                user_id = %user.id,
                generation_id = %generation_id,
                tokens = result.total_tokens,
                "Generation completed"
            );
            Ok(Json(response))
        }
        Err(e) => {
            let message = e.to_string();
            error!(user_id = %user.id, generation_id = %pending.id, %message, "Generation failed");

            let update = UpdateGenerationRow::failed(message.clone(), Utc::now());
            let log_row = NewUsageLogRow {
                user_id: user.id,
                generation_id: Some(pending.id),
                event_type: "generation_failed".to_string(),
                platform_count,
                platforms: Some(platform_names),
                tokens_used: None,
                estimated_cost_cents: None,
                user_agent,
                ip_address: Some(ip),
            };
            let generation_id = pending.id;
            with_conn(&state.pool, move |conn| {
                PostgresGenerationRepository::new(conn)
                    .settle_generation(generation_id, update)?;
                PostgresUsageLogRepository::new(conn).log_event(log_row)?;
                Ok(())
            })
            .await?;

            Err(ApiFailure::GenerationFailed(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_estimate_rounds_up_to_whole_cents() {
        assert_eq!(estimated_cost_cents(0), 0);
        assert_eq!(estimated_cost_cents(1), 1);
        assert_eq!(estimated_cost_cents(500), 1);
        assert_eq!(estimated_cost_cents(501), 2);
        assert_eq!(estimated_cost_cents(10_000), 20);
    }

    #[test]
    fn body_decodes_camel_case_fields() {
        let body: GenerateBody = serde_json::from_str(
            r#"{
                "content": "some text",
                "platforms": ["tiktok", "linkedin"],
                "tone": "authority"
            }"#,
        )
        .unwrap();
        assert_eq!(body.platforms, vec![Platform::TikTok, Platform::LinkedIn]);
        assert_eq!(body.tone, Tone::Authority);
    }

    #[test]
    fn unknown_platform_is_rejected_at_decode() {
        let result = serde_json::from_str::<GenerateBody>(
            r#"{"content": "x", "platforms": ["myspace"], "tone": "authority"}"#,
        );
        assert!(result.is_err());
    }
}
