//! HTTP server errors.

/// Server error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// Server failed to bind or start
    #[display("Startup failed: {}", _0)]
    Startup(String),

    /// Required configuration was missing or malformed
    #[display("Configuration error: {}", _0)]
    Config(String),
}

/// Server error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at {}:{}", kind, file, line)]
pub struct ServerError {
    /// The specific error kind
    pub kind: ServerErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new server error.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ServerErrorKind {
        &self.kind
    }
}

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
