//! Top-level error wrapper types.

#[cfg(feature = "database")]
use crate::DatabaseError;
use crate::{ConfigError, HttpError, JsonError, LlmError, PipelineError, PolicyError, ServerError};

/// Foundation error enum covering every Reflow crate.
///
/// # Examples
///
/// ```
/// use reflow_error::{HttpError, ReflowError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ReflowError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ReflowErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// LLM provider adapter error
    #[from(LlmError)]
    Llm(LlmError),
    /// Policy gate error
    #[from(PolicyError)]
    Policy(PolicyError),
    /// Generation pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Reflow error with kind discrimination.
///
/// # Examples
///
/// ```
/// use reflow_error::{ConfigError, ReflowResult};
///
/// fn might_fail() -> ReflowResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Reflow Error: {}", _0)]
pub struct ReflowError(Box<ReflowErrorKind>);

impl ReflowError {
    /// Create a new error from a kind.
    pub fn new(kind: ReflowErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReflowErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ReflowErrorKind
impl<T> From<T> for ReflowError
where
    T: Into<ReflowErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Reflow operations.
pub type ReflowResult<T> = std::result::Result<T, ReflowError>;
