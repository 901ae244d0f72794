//! Repository for generation records.

use crate::{GenerationRow, NewGenerationRow, UpdateGenerationRow};
use diesel::prelude::*;
use reflow_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use uuid::Uuid;

/// Newest-first history reads are capped at this many records.
pub const HISTORY_LIMIT: i64 = 50;

/// Repository trait for generation record lifecycle and history.
pub trait GenerationRepository {
    /// Insert the pending record for an admitted request.
    ///
    /// # Returns
    /// The created row with its assigned id.
    fn start_generation(&mut self, new_row: NewGenerationRow) -> DatabaseResult<GenerationRow>;

    /// Settle a record with the given changeset.
    fn settle_generation(
        &mut self,
        generation_id: Uuid,
        update: UpdateGenerationRow,
    ) -> DatabaseResult<GenerationRow>;

    /// The user's generation history, newest first, capped at
    /// [`HISTORY_LIMIT`] records.
    fn history_for_user(&mut self, user_id: Uuid) -> DatabaseResult<Vec<GenerationRow>>;
}

/// PostgreSQL implementation of [`GenerationRepository`].
pub struct PostgresGenerationRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PostgresGenerationRepository<'a> {
    /// Create a new repository with a mutable connection reference.
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

fn query_error(e: diesel::result::Error) -> DatabaseError {
    DatabaseError::new(DatabaseErrorKind::Query(e.to_string()))
}

impl<'a> GenerationRepository for PostgresGenerationRepository<'a> {
    fn start_generation(&mut self, new_row: NewGenerationRow) -> DatabaseResult<GenerationRow> {
        use crate::schema::generations;

        diesel::insert_into(generations::table)
            .values(&new_row)
            .get_result(self.conn)
            .map_err(query_error)
    }

    fn settle_generation(
        &mut self,
        generation_id: Uuid,
        update: UpdateGenerationRow,
    ) -> DatabaseResult<GenerationRow> {
        use crate::schema::generations::dsl;

        diesel::update(dsl::generations.filter(dsl::id.eq(generation_id)))
            .set(&update)
            .get_result(self.conn)
            .map_err(query_error)
    }

    fn history_for_user(&mut self, user_id: Uuid) -> DatabaseResult<Vec<GenerationRow>> {
        use crate::schema::generations::dsl;

        dsl::generations
            .filter(dsl::user_id.eq(user_id))
            .order(dsl::created_at.desc())
            .limit(HISTORY_LIMIT)
            .select(GenerationRow::as_select())
            .load(self.conn)
            .map_err(query_error)
    }
}
