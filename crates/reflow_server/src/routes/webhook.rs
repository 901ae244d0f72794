//! `POST /api/webhooks/billing`: subscription changes from the billing
//! provider.
//!
//! Signature verification happens at the edge; by the time an event reaches
//! this handler it is trusted. Every event is recorded before handling so a
//! crash mid-update leaves an unprocessed row to replay.

use crate::db::with_conn;
use crate::failure::ApiFailure;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::Utc;
use reflow_core::Tier;
use reflow_database::{
    NewWebhookEventRow, PostgresUserRepository, PostgresWebhookRepository, UserRepository,
    WebhookRepository,
};
use reflow_policy::generation_limit;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

/// Event types that carry a subscription's current plan.
const SUBSCRIPTION_EVENTS: [&str; 3] = [
    "checkout.session.completed",
    "customer.subscription.created",
    "customer.subscription.updated",
];

const SUBSCRIPTION_DELETED: &str = "customer.subscription.deleted";

/// One billing event, as delivered by the provider.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BillingEvent {
    event_id: String,
    event_type: String,
    payload: Value,
}

/// Maps a provider plan name onto a tier.
fn plan_tier(plan: &str) -> Tier {
    let plan = plan.to_ascii_lowercase();
    if plan.contains("business") {
        Tier::Business
    } else if plan.contains("pro") {
        Tier::Pro
    } else {
        Tier::Free
    }
}

/// The tier change an event calls for, if any.
fn tier_change(event: &BillingEvent) -> Option<Tier> {
    if SUBSCRIPTION_EVENTS.contains(&event.event_type.as_str()) {
        let plan = event.payload.get("plan").and_then(Value::as_str)?;
        Some(plan_tier(plan))
    } else if event.event_type == SUBSCRIPTION_DELETED {
        Some(Tier::Free)
    } else {
        None
    }
}

fn apply_event(
    conn: &mut diesel::pg::PgConnection,
    event: &BillingEvent,
) -> Result<(), ApiFailure> {
    let Some(tier) = tier_change(event) else {
        info!(event_type = %event.event_type, "Ignoring unhandled billing event");
        return Ok(());
    };

    let Some(external_id) = event.payload.get("externalUserId").and_then(Value::as_str) else {
        return Err(ApiFailure::Validation(
            "billing event payload missing externalUserId".to_string(),
        ));
    };

    let mut users = PostgresUserRepository::new(conn);
    let Some(user) = users.find_by_external_id(external_id)? else {
        warn!(external_id, "Billing event for unknown user");
        return Err(ApiFailure::UserNotFound);
    };

    users.update_tier(user.id, tier, generation_limit(tier))?;
    info!(user_id = %user.id, %tier, "Applied subscription change");
    Ok(())
}

/// Records and applies one billing event.
///
/// The provider retries on non-2xx, so handling failures are recorded
/// against the event and the response stays 200.
#[instrument(skip_all)]
pub(crate) async fn billing_webhook(
    State(state): State<AppState>,
    body: Result<Json<BillingEvent>, JsonRejection>,
) -> Result<Json<Value>, ApiFailure> {
    let Json(event) = body.map_err(|rejection| ApiFailure::Validation(rejection.body_text()))?;

    with_conn(&state.pool, move |conn| {
        let record = NewWebhookEventRow {
            source: "billing".to_string(),
            event_type: event.event_type.clone(),
            event_id: event.event_id.clone(),
            payload: event.payload.clone(),
            processed: false,
        };
        PostgresWebhookRepository::new(conn).record_event(record)?;

        match apply_event(conn, &event) {
            Ok(()) => {
                PostgresWebhookRepository::new(conn)
                    .mark_processed(&event.event_id, Utc::now())?;
            }
            Err(failure) => {
                warn!(event_id = %event.event_id, ?failure, "Billing event not applied");
                PostgresWebhookRepository::new(conn)
                    .mark_failed(&event.event_id, &format!("{:?}", failure))?;
            }
        }
        Ok(())
    })
    .await?;

    Ok(Json(json!({ "received": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_type: &str, payload: Value) -> BillingEvent {
        BillingEvent {
            event_id: "evt_1".to_string(),
            event_type: event_type.to_string(),
            payload,
        }
    }

    #[test]
    fn plan_names_map_onto_tiers() {
        assert_eq!(plan_tier("price_pro_monthly"), Tier::Pro);
        assert_eq!(plan_tier("Business Annual"), Tier::Business);
        assert_eq!(plan_tier("starter"), Tier::Free);
    }

    #[test]
    fn subscription_updates_carry_the_plan_tier() {
        let e = event(
            "customer.subscription.updated",
            json!({"plan": "pro_monthly", "externalUserId": "u1"}),
        );
        assert_eq!(tier_change(&e), Some(Tier::Pro));
    }

    #[test]
    fn deletion_drops_to_free() {
        let e = event("customer.subscription.deleted", json!({}));
        assert_eq!(tier_change(&e), Some(Tier::Free));
    }

    #[test]
    fn unrelated_events_change_nothing() {
        let e = event("invoice.payment_succeeded", json!({"plan": "pro"}));
        assert_eq!(tier_change(&e), None);
    }

    #[test]
    fn event_body_decodes_camel_case() {
        let e: BillingEvent = serde_json::from_str(
            r#"{
                "eventId": "evt_9",
                "eventType": "checkout.session.completed",
                "payload": {"plan": "business", "externalUserId": "u2"}
            }"#,
        )
        .unwrap();
        assert_eq!(e.event_id, "evt_9");
        assert_eq!(tier_change(&e), Some(Tier::Business));
    }
}
