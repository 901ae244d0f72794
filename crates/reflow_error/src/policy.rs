//! Policy gate errors.
//!
//! Denials (quota exhausted, tier locked, rate limited) are decisions, not
//! errors; they are expressed as data by `reflow_policy`. These kinds cover
//! genuine failures inside the gate itself.

/// Policy gate error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PolicyErrorKind {
    /// Rate gate configuration was invalid (e.g. a zero window size)
    #[display("Invalid rate limit configuration: {}", _0)]
    InvalidRateConfig(String),

    /// A quota snapshot carried impossible values
    #[display("Invalid usage snapshot: {}", _0)]
    InvalidSnapshot(String),
}

/// Policy error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Policy Error: {} at {}:{}", kind, file, line)]
pub struct PolicyError {
    /// The specific error kind
    pub kind: PolicyErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl PolicyError {
    /// Create a new policy error.
    #[track_caller]
    pub fn new(kind: PolicyErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PolicyErrorKind {
        &self.kind
    }
}

/// Result type for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;
