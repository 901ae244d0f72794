//! Database errors.

/// Database error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DatabaseErrorKind {
    /// Connection establishment or pool checkout failed
    #[display("Connection error: {}", _0)]
    Connection(String),

    /// A query failed to execute
    #[display("Query error: {}", _0)]
    Query(String),

    /// A row expected to exist was not found
    #[display("Not found: {}", _0)]
    NotFound(String),

    /// Row data could not be serialized for storage
    #[display("Serialization error: {}", _0)]
    Serialization(String),
}

/// Database error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Database Error: {} at {}:{}", kind, file, line)]
pub struct DatabaseError {
    /// The specific error kind
    pub kind: DatabaseErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl DatabaseError {
    /// Create a new database error.
    #[track_caller]
    pub fn new(kind: DatabaseErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DatabaseErrorKind {
        &self.kind
    }
}

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
