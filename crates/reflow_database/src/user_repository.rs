//! Repository for account rows and their usage counters.

use crate::UserRow;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use reflow_core::Tier;
use reflow_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use uuid::Uuid;

/// Repository trait for account operations.
pub trait UserRepository {
    /// Look up an account by the verified external user id.
    ///
    /// # Errors
    /// Returns DatabaseError if the query fails; an unknown id is `None`,
    /// not an error.
    fn find_by_external_id(&mut self, external_id: &str) -> DatabaseResult<Option<UserRow>>;

    /// Reload an account by internal id.
    fn find_by_id(&mut self, user_id: Uuid) -> DatabaseResult<Option<UserRow>>;

    /// Roll the monthly usage window forward if it has lapsed.
    ///
    /// Issues a single conditional update guarded by the stored reset time,
    /// so when several requests race only one performs the rollover and the
    /// rest see zero rows affected.
    ///
    /// # Returns
    /// Whether this call performed the rollover.
    fn reset_usage_if_lapsed(
        &mut self,
        user_id: Uuid,
        now: DateTime<Utc>,
        next_reset: DateTime<Utc>,
    ) -> DatabaseResult<bool>;

    /// Count one generation against the account.
    ///
    /// The increment is relative (`count = count + 1`) so concurrent
    /// requests cannot lose updates.
    fn increment_usage(&mut self, user_id: Uuid, now: DateTime<Utc>) -> DatabaseResult<()>;

    /// Move the account to a tier and its matching generation limit.
    fn update_tier(&mut self, user_id: Uuid, tier: Tier, limit: i32) -> DatabaseResult<()>;
}

/// PostgreSQL implementation of [`UserRepository`].
pub struct PostgresUserRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PostgresUserRepository<'a> {
    /// Create a new repository with a mutable connection reference.
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

fn query_error(e: diesel::result::Error) -> DatabaseError {
    DatabaseError::new(DatabaseErrorKind::Query(e.to_string()))
}

impl<'a> UserRepository for PostgresUserRepository<'a> {
    fn find_by_external_id(&mut self, external_id: &str) -> DatabaseResult<Option<UserRow>> {
        use crate::schema::users::dsl;

        dsl::users
            .filter(dsl::external_user_id.eq(external_id))
            .select(UserRow::as_select())
            .first(self.conn)
            .optional()
            .map_err(query_error)
    }

    fn find_by_id(&mut self, user_id: Uuid) -> DatabaseResult<Option<UserRow>> {
        use crate::schema::users::dsl;

        dsl::users
            .filter(dsl::id.eq(user_id))
            .select(UserRow::as_select())
            .first(self.conn)
            .optional()
            .map_err(query_error)
    }

    fn reset_usage_if_lapsed(
        &mut self,
        user_id: Uuid,
        now: DateTime<Utc>,
        next_reset: DateTime<Utc>,
    ) -> DatabaseResult<bool> {
        use crate::schema::users::dsl;

        let affected = diesel::update(
            dsl::users
                .filter(dsl::id.eq(user_id))
                .filter(dsl::usage_reset_at.le(now)),
        )
        .set((
            dsl::generations_count_current_month.eq(0),
            dsl::usage_reset_at.eq(next_reset),
            dsl::updated_at.eq(now),
        ))
        .execute(self.conn)
        .map_err(query_error)?;

        Ok(affected > 0)
    }

    fn increment_usage(&mut self, user_id: Uuid, now: DateTime<Utc>) -> DatabaseResult<()> {
        use crate::schema::users::dsl;

        diesel::update(dsl::users.filter(dsl::id.eq(user_id)))
            .set((
                dsl::generations_count_current_month
                    .eq(dsl::generations_count_current_month + 1),
                dsl::last_generation_at.eq(now),
                dsl::updated_at.eq(now),
            ))
            .execute(self.conn)
            .map(|_| ())
            .map_err(query_error)
    }

    fn update_tier(&mut self, user_id: Uuid, tier: Tier, limit: i32) -> DatabaseResult<()> {
        use crate::schema::users::dsl;

        diesel::update(dsl::users.filter(dsl::id.eq(user_id)))
            .set((
                dsl::subscription_tier.eq(tier.to_string()),
                dsl::generations_limit.eq(limit),
                dsl::updated_at.eq(Utc::now()),
            ))
            .execute(self.conn)
            .map(|_| ())
            .map_err(query_error)
    }
}
