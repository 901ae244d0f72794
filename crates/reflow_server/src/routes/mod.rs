//! Route handlers.

mod generate;
mod history;
mod tier;
mod usage;
mod webhook;

pub(crate) use generate::generate;
pub(crate) use history::history;
pub(crate) use tier::tier;
pub(crate) use usage::usage;
pub(crate) use webhook::billing_webhook;

use crate::db::with_conn;
use crate::failure::ApiFailure;
use crate::state::AppState;
use reflow_database::{PostgresUserRepository, UserRepository, UserRow};

/// Loads the account for a verified external user id.
///
/// An unknown id is `UserNotFound`; authenticated routes share this because
/// every one of them starts from the account row.
pub(crate) async fn load_user(state: &AppState, external_id: &str) -> Result<UserRow, ApiFailure> {
    let external_id = external_id.to_string();
    with_conn(&state.pool, move |conn| {
        PostgresUserRepository::new(conn)
            .find_by_external_id(&external_id)
            .map_err(ApiFailure::from)
    })
    .await?
    .ok_or(ApiFailure::UserNotFound)
}
