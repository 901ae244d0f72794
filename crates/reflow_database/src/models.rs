//! Row types for the four persistence tables.

use crate::schema::{generations, usage_logs, users, webhook_events};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use reflow_core::{GenerationRequest, GenerationResult, GenerationStatus, PlatformOutput, Tier};
use reflow_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use serde_json::Value;
use uuid::Uuid;

/// One account row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Internal account id
    pub id: Uuid,
    /// Verified id supplied by the upstream identity layer
    pub external_user_id: String,
    /// Account email
    pub email: String,
    /// Display name, if known
    pub full_name: Option<String>,
    /// Stored tier name (`free`, `pro`, `business`)
    pub subscription_tier: String,
    /// Billing status as reported by the billing provider
    pub subscription_status: String,
    /// Generations consumed in the current month
    pub generations_count_current_month: i32,
    /// Generations permitted per month
    pub generations_limit: i32,
    /// Time of the most recent generation
    pub last_generation_at: Option<DateTime<Utc>>,
    /// When the monthly counters lapse
    pub usage_reset_at: DateTime<Utc>,
    /// Preferred tone, if the user set one
    pub default_tone: Option<String>,
    /// Account creation time (anchors the free trial window)
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Parses the stored tier name.
    pub fn tier(&self) -> DatabaseResult<Tier> {
        self.subscription_tier.parse().map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                "unknown tier {:?} on user {}",
                self.subscription_tier, self.id
            )))
        })
    }
}

/// One persisted generation record.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = generations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GenerationRow {
    /// Record id
    pub id: Uuid,
    /// Owning account
    pub user_id: Uuid,
    /// Sanitized input content
    pub input_content: String,
    /// SHA-256 of the input content, lowercase hex
    pub input_content_hash: String,
    /// Requested platforms, in request order
    pub selected_platforms: Vec<String>,
    /// Requested tone name
    pub selected_tone: String,
    /// Analyzer core message
    pub core_message: Option<String>,
    /// Analyzer key points, as a JSON array of strings
    pub key_points: Option<Value>,
    /// Analyzer topic
    pub detected_topic: Option<String>,
    /// Analyzer audience
    pub detected_audience: Option<String>,
    /// Per-platform outcomes, as serialized `Vec<PlatformOutput>`
    pub outputs: Option<Value>,
    /// Wall-clock run duration in milliseconds
    pub generation_time_ms: Option<i32>,
    /// Provider that served the analysis call
    pub llm_provider: Option<String>,
    /// Model that served the analysis call
    pub llm_model: Option<String>,
    /// Token total across analysis and fulfilled platform calls
    pub total_tokens_used: Option<i32>,
    /// Stored lifecycle status name
    pub status: String,
    /// Failure message for failed records
    pub error_message: Option<String>,
    /// Record creation time
    pub created_at: DateTime<Utc>,
    /// When the run settled
    pub completed_at: Option<DateTime<Utc>>,
}

impl GenerationRow {
    /// Parses the stored status name.
    pub fn status(&self) -> DatabaseResult<GenerationStatus> {
        self.status.parse().map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                "unknown status {:?} on generation {}",
                self.status, self.id
            )))
        })
    }

    /// Decodes the stored per-platform outcomes.
    pub fn platform_outputs(&self) -> DatabaseResult<Option<Vec<PlatformOutput>>> {
        match &self.outputs {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|e| {
                DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                    "outputs column on generation {}: {}",
                    self.id, e
                )))
            }),
        }
    }
}

/// Insert shape for a pending generation record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = generations)]
pub struct NewGenerationRow {
    /// Owning account
    pub user_id: Uuid,
    /// Sanitized input content
    pub input_content: String,
    /// SHA-256 of the input content
    pub input_content_hash: String,
    /// Requested platforms, in request order
    pub selected_platforms: Vec<String>,
    /// Requested tone name
    pub selected_tone: String,
    /// Always `pending` at insert time
    pub status: String,
}

impl NewGenerationRow {
    /// Builds the pending record for an admitted request.
    pub fn pending(user_id: Uuid, request: &GenerationRequest, content_hash: String) -> Self {
        Self {
            user_id,
            input_content: request.content.clone(),
            input_content_hash: content_hash,
            selected_platforms: request.platforms.iter().map(|p| p.to_string()).collect(),
            selected_tone: request.tone.to_string(),
            status: GenerationStatus::Pending.to_string(),
        }
    }
}

/// Changeset applied when a run settles.
///
/// All fields are optional; absent fields are left untouched, so the same
/// shape serves both the completed and failed transitions.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = generations)]
pub struct UpdateGenerationRow {
    /// Analyzer core message
    pub core_message: Option<String>,
    /// Analyzer key points
    pub key_points: Option<Value>,
    /// Analyzer topic
    pub detected_topic: Option<String>,
    /// Analyzer audience
    pub detected_audience: Option<String>,
    /// Serialized per-platform outcomes
    pub outputs: Option<Value>,
    /// Run duration in milliseconds
    pub generation_time_ms: Option<i32>,
    /// Provider that served the analysis call
    pub llm_provider: Option<String>,
    /// Model that served the analysis call
    pub llm_model: Option<String>,
    /// Token total
    pub total_tokens_used: Option<i32>,
    /// New lifecycle status name
    pub status: Option<String>,
    /// Failure message
    pub error_message: Option<String>,
    /// Settlement time
    pub completed_at: Option<DateTime<Utc>>,
}

impl UpdateGenerationRow {
    /// Changeset for a run the orchestrator returned from.
    pub fn completed(result: &GenerationResult, now: DateTime<Utc>) -> DatabaseResult<Self> {
        let outputs = serde_json::to_value(&result.outputs).map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                "serializing outputs: {}",
                e
            )))
        })?;
        let key_points = serde_json::to_value(&result.analysis.key_points).map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                "serializing key points: {}",
                e
            )))
        })?;
        Ok(Self {
            core_message: Some(result.analysis.core_message.clone()),
            key_points: Some(key_points),
            detected_topic: Some(result.analysis.topic.clone()),
            detected_audience: Some(result.analysis.audience.clone()),
            outputs: Some(outputs),
            generation_time_ms: Some(result.generation_time_ms as i32),
            llm_provider: Some(result.llm_provider.clone()),
            llm_model: Some(result.llm_model.clone()),
            total_tokens_used: Some(result.total_tokens as i32),
            status: Some(GenerationStatus::Completed.to_string()),
            error_message: None,
            completed_at: Some(now),
        })
    }

    /// Changeset for a run that failed before producing outputs.
    pub fn failed(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            status: Some(GenerationStatus::Failed.to_string()),
            error_message: Some(message.into()),
            completed_at: Some(now),
            ..Self::default()
        }
    }
}

/// One usage log row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = usage_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UsageLogRow {
    /// Log id
    pub id: Uuid,
    /// Owning account
    pub user_id: Uuid,
    /// Related generation record, if any
    pub generation_id: Option<Uuid>,
    /// Event name (e.g. `generation_completed`)
    pub event_type: String,
    /// Number of platforms in the request
    pub platform_count: i32,
    /// Requested platform names
    pub platforms: Option<Vec<String>>,
    /// Token total for the run
    pub tokens_used: Option<i32>,
    /// Rough cost estimate in cents
    pub estimated_cost_cents: Option<i32>,
    /// Requesting user agent
    pub user_agent: Option<String>,
    /// Requesting client address
    pub ip_address: Option<String>,
    /// Log time
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a usage log row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = usage_logs)]
pub struct NewUsageLogRow {
    /// Owning account
    pub user_id: Uuid,
    /// Related generation record, if any
    pub generation_id: Option<Uuid>,
    /// Event name
    pub event_type: String,
    /// Number of platforms in the request
    pub platform_count: i32,
    /// Requested platform names
    pub platforms: Option<Vec<String>>,
    /// Token total for the run
    pub tokens_used: Option<i32>,
    /// Rough cost estimate in cents
    pub estimated_cost_cents: Option<i32>,
    /// Requesting user agent
    pub user_agent: Option<String>,
    /// Requesting client address
    pub ip_address: Option<String>,
}

/// One recorded billing webhook event.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = webhook_events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WebhookEventRow {
    /// Event record id
    pub id: Uuid,
    /// Event source (e.g. `billing`)
    pub source: String,
    /// Source-defined event type
    pub event_type: String,
    /// Source-defined unique event id
    pub event_id: String,
    /// Raw event payload
    pub payload: Value,
    /// Whether handling finished
    pub processed: bool,
    /// When handling finished
    pub processed_at: Option<DateTime<Utc>>,
    /// Handling failure message
    pub error_message: Option<String>,
    /// Times handling has been retried
    pub retry_count: i32,
    /// Receipt time
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a webhook event record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = webhook_events)]
pub struct NewWebhookEventRow {
    /// Event source
    pub source: String,
    /// Source-defined event type
    pub event_type: String,
    /// Source-defined unique event id
    pub event_id: String,
    /// Raw event payload
    pub payload: Value,
    /// Always false at receipt
    pub processed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflow_core::{Platform, PlatformContent, ThreadsContent, Tone};

    fn request() -> GenerationRequest {
        GenerationRequest {
            content: "input".to_string(),
            platforms: vec![Platform::Threads, Platform::LinkedIn],
            tone: Tone::Opinionated,
        }
    }

    #[test]
    fn pending_row_stores_lowercase_names() {
        let row = NewGenerationRow::pending(Uuid::nil(), &request(), "abc".to_string());
        assert_eq!(row.selected_platforms, vec!["threads", "linkedin"]);
        assert_eq!(row.selected_tone, "opinionated");
        assert_eq!(row.status, "pending");
    }

    #[test]
    fn completed_changeset_round_trips_outputs() {
        let result = GenerationResult {
            analysis: serde_json::from_str(
                r#"{
                    "coreMessage": "m",
                    "keyPoints": ["a"],
                    "topic": "t",
                    "audience": "au",
                    "contentType": "blog",
                    "tone": "casual"
                }"#,
            )
            .unwrap(),
            outputs: vec![reflow_core::PlatformOutput::fulfilled(
                Platform::Threads,
                PlatformContent::Threads(ThreadsContent {
                    posts: vec!["p".to_string()],
                    post_count: 1,
                    hashtags: vec![],
                    engagement_tip: "tip".to_string(),
                }),
            )],
            total_tokens: 10,
            generation_time_ms: 5,
            llm_provider: "openai".to_string(),
            llm_model: "m".to_string(),
        };
        let update = UpdateGenerationRow::completed(&result, Utc::now()).unwrap();
        assert_eq!(update.status.as_deref(), Some("completed"));

        let stored: Vec<PlatformOutput> =
            serde_json::from_value(update.outputs.unwrap()).unwrap();
        assert_eq!(stored, result.outputs);
    }

    #[test]
    fn failed_changeset_touches_only_failure_fields() {
        let update = UpdateGenerationRow::failed("boom", Utc::now());
        assert_eq!(update.status.as_deref(), Some("failed"));
        assert_eq!(update.error_message.as_deref(), Some("boom"));
        assert!(update.outputs.is_none());
        assert!(update.core_message.is_none());
    }
}
