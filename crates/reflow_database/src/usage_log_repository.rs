//! Repository for per-generation usage log rows.

use crate::{NewUsageLogRow, UsageLogRow};
use diesel::prelude::*;
use reflow_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};

/// Repository trait for usage log writes.
pub trait UsageLogRepository {
    /// Append one usage event.
    fn log_event(&mut self, new_row: NewUsageLogRow) -> DatabaseResult<UsageLogRow>;
}

/// PostgreSQL implementation of [`UsageLogRepository`].
pub struct PostgresUsageLogRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PostgresUsageLogRepository<'a> {
    /// Create a new repository with a mutable connection reference.
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

impl<'a> UsageLogRepository for PostgresUsageLogRepository<'a> {
    fn log_event(&mut self, new_row: NewUsageLogRow) -> DatabaseResult<UsageLogRow> {
        use crate::schema::usage_logs;

        diesel::insert_into(usage_logs::table)
            .values(&new_row)
            .get_result(self.conn)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))
    }
}
