//! Blocking database access from async handlers.

use crate::failure::ApiFailure;
use diesel::pg::PgConnection;
use reflow_database::DbPool;

/// Runs a closure against a pooled connection on the blocking thread pool.
///
/// Diesel is synchronous; every handler database touch goes through here so
/// the async runtime is never blocked on a query.
pub(crate) async fn with_conn<T, F>(pool: &DbPool, f: F) -> Result<T, ApiFailure>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> Result<T, ApiFailure> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool
            .get()
            .map_err(|e| ApiFailure::Internal(format!("connection pool: {}", e)))?;
        f(&mut conn)
    })
    .await
    .map_err(|e| ApiFailure::Internal(format!("blocking task: {}", e)))?
}
