//! Repository for billing webhook event records.

use crate::{NewWebhookEventRow, WebhookEventRow};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use reflow_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};

/// Repository trait for webhook event bookkeeping.
pub trait WebhookRepository {
    /// Record a received event before handling it.
    fn record_event(&mut self, new_row: NewWebhookEventRow) -> DatabaseResult<WebhookEventRow>;

    /// Mark an event as handled.
    fn mark_processed(&mut self, event_id: &str, now: DateTime<Utc>) -> DatabaseResult<()>;

    /// Record a handling failure against an event.
    fn mark_failed(&mut self, event_id: &str, message: &str) -> DatabaseResult<()>;
}

/// PostgreSQL implementation of [`WebhookRepository`].
pub struct PostgresWebhookRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PostgresWebhookRepository<'a> {
    /// Create a new repository with a mutable connection reference.
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

fn query_error(e: diesel::result::Error) -> DatabaseError {
    DatabaseError::new(DatabaseErrorKind::Query(e.to_string()))
}

impl<'a> WebhookRepository for PostgresWebhookRepository<'a> {
    fn record_event(&mut self, new_row: NewWebhookEventRow) -> DatabaseResult<WebhookEventRow> {
        use crate::schema::webhook_events;

        diesel::insert_into(webhook_events::table)
            .values(&new_row)
            .get_result(self.conn)
            .map_err(query_error)
    }

    fn mark_processed(&mut self, event_id: &str, now: DateTime<Utc>) -> DatabaseResult<()> {
        use crate::schema::webhook_events::dsl;

        diesel::update(dsl::webhook_events.filter(dsl::event_id.eq(event_id)))
            .set((dsl::processed.eq(true), dsl::processed_at.eq(now)))
            .execute(self.conn)
            .map(|_| ())
            .map_err(query_error)
    }

    fn mark_failed(&mut self, event_id: &str, message: &str) -> DatabaseResult<()> {
        use crate::schema::webhook_events::dsl;

        diesel::update(dsl::webhook_events.filter(dsl::event_id.eq(event_id)))
            .set((
                dsl::error_message.eq(message),
                dsl::retry_count.eq(dsl::retry_count + 1),
            ))
            .execute(self.conn)
            .map(|_| ())
            .map_err(query_error)
    }
}
