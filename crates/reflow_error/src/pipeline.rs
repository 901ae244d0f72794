//! Generation pipeline errors.

use crate::LlmError;

/// Pipeline error conditions.
///
/// `Analysis` is fatal to a whole generation request; per-platform failures
/// never appear here because the orchestrator converts them into data.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum PipelineErrorKind {
    /// Request failed structural validation before entering the pipeline
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),

    /// Stage 1 content analysis failed (LLM call or invalid JSON)
    #[display("Content analysis failed: {}", _0)]
    #[from(LlmError)]
    Analysis(LlmError),
}

/// Pipeline error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at {}:{}", kind, file, line)]
pub struct PipelineError {
    /// The specific error kind
    pub kind: PipelineErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PipelineErrorKind {
        &self.kind
    }
}

impl From<LlmError> for PipelineError {
    #[track_caller]
    fn from(err: LlmError) -> Self {
        Self::new(PipelineErrorKind::Analysis(err))
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
