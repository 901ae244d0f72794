//! Request failure type mapped onto the HTTP contract.

use axum::Json;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use reflow_core::{Platform, Tier};
use reflow_error::DatabaseError;
use reflow_policy::{QuotaDecision, RateDecision};
use serde_json::json;
use tracing::error;

/// Everything that can stop a request short of a success body.
///
/// Denials carry the policy decision that produced them so the response can
/// explain itself (limits, reset times, locked platforms).
#[derive(Debug)]
pub enum ApiFailure {
    /// No verified user id on the request
    Unauthorized,
    /// The verified user id has no account row
    UserNotFound,
    /// A rate counter denied the request
    RateLimited(RateDecision),
    /// The monthly quota is exhausted
    QuotaExceeded(QuotaDecision),
    /// The tier does not cover every requested platform
    TierDenied {
        /// Requested platforms the tier does not cover
        denied: Vec<Platform>,
        /// The user's tier
        tier: Tier,
    },
    /// The request body failed structural validation
    Validation(String),
    /// The pipeline failed after admission
    GenerationFailed(String),
    /// Infrastructure failure (pool, query, serialization)
    Internal(String),
}

impl From<DatabaseError> for ApiFailure {
    fn from(err: DatabaseError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => {
                (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response()
            }
            Self::UserNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "User not found"})),
            )
                .into_response(),
            Self::RateLimited(decision) => {
                let retry_ms = decision
                    .retry_after
                    .map(|d| d.as_millis() as i64)
                    .unwrap_or(60_000);
                let reset = Utc::now().timestamp_millis() + retry_ms;
                let mut response = (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({
                        "error": "Rate limit exceeded",
                        "retryAfter": reset,
                    })),
                )
                    .into_response();
                let headers = response.headers_mut();
                headers.insert("X-RateLimit-Limit", HeaderValue::from(decision.limit));
                headers.insert("X-RateLimit-Remaining", HeaderValue::from(decision.remaining));
                headers.insert("X-RateLimit-Reset", HeaderValue::from(reset));
                response
            }
            Self::QuotaExceeded(decision) => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "error": "Quota exceeded",
                    "message": format!(
                        "You've used all {} generations this month. Upgrade to Pro for more.",
                        decision.limit
                    ),
                    "limit": decision.limit,
                    "remaining": decision.remaining,
                    "resetsAt": decision.resets_at,
                })),
            )
                .into_response(),
            Self::TierDenied { denied, tier } => {
                let names: Vec<String> = denied.iter().map(|p| p.to_string()).collect();
                (
                    StatusCode::FORBIDDEN,
                    Json(json!({
                        "error": "Platform access denied",
                        "message": format!(
                            "Your plan doesn't include access to: {}. Upgrade to Pro to unlock all platforms.",
                            names.join(", ")
                        ),
                        "invalidPlatforms": names,
                        "tier": tier,
                    })),
                )
                    .into_response()
            }
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({"error": message}))).into_response()
            }
            Self::GenerationFailed(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Generation failed",
                    "message": message,
                })),
            )
                .into_response(),
            Self::Internal(message) => {
                error!(%message, "Internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflow_policy::RateScope;
    use std::time::Duration;

    #[test]
    fn rate_limited_response_carries_limit_headers() {
        let failure = ApiFailure::RateLimited(RateDecision {
            allowed: false,
            scope: RateScope::User,
            limit: 10,
            remaining: 0,
            retry_after: Some(Duration::from_secs(30)),
        });
        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get("X-RateLimit-Limit"),
            Some(&HeaderValue::from(10u32))
        );
        assert_eq!(
            response.headers().get("X-RateLimit-Remaining"),
            Some(&HeaderValue::from(0u32))
        );
        assert!(response.headers().contains_key("X-RateLimit-Reset"));
    }

    #[test]
    fn status_codes_match_the_contract() {
        assert_eq!(
            ApiFailure::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiFailure::UserNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiFailure::Validation("bad".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiFailure::TierDenied {
                denied: vec![Platform::TikTok],
                tier: Tier::Free,
            }
            .into_response()
            .status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiFailure::GenerationFailed("boom".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
