//! LLM provider adapter errors.

/// LLM provider error conditions.
///
/// `InvalidOutput` is deliberately distinct from transport and vendor errors:
/// it signals that the model responded successfully but the response body was
/// not the JSON the caller asked for, so callers can decide whether to retry
/// or surface the failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LlmErrorKind {
    /// No provider credential was present at construction time
    #[display("No LLM provider configured. Set OPENAI_API_KEY, ANTHROPIC_API_KEY, or GOOGLE_API_KEY.")]
    NoProviderConfigured,

    /// HTTP transport failure talking to a vendor
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Vendor API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    ApiError {
        /// HTTP status code returned by the vendor
        status: u16,
        /// Vendor-supplied error body
        message: String,
    },

    /// Vendor response body could not be decoded into its wire format
    #[display("Failed to parse provider response: {}", _0)]
    Parse(String),

    /// The model returned content that is not valid JSON for the caller
    #[display("LLM returned invalid JSON: {}", _0)]
    InvalidOutput(String),

    /// The vendor response carried no usable content
    #[display("Empty response from provider: {}", _0)]
    EmptyResponse(String),
}

/// LLM provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("LLM Error: {} at {}:{}", kind, file, line)]
pub struct LlmError {
    /// The specific error kind
    pub kind: LlmErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl LlmError {
    /// Create a new LLM error.
    #[track_caller]
    pub fn new(kind: LlmErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LlmErrorKind {
        &self.kind
    }

    /// Whether this error came from `parse_json` rejecting model output.
    pub fn is_invalid_output(&self) -> bool {
        matches!(self.kind, LlmErrorKind::InvalidOutput(_))
    }
}

/// Result type for LLM adapter operations.
pub type LlmResult<T> = Result<T, LlmError>;
