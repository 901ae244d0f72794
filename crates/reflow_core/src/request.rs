//! Generation request.

use crate::{Platform, Tone};
use serde::{Deserialize, Serialize};

/// A validated generation request.
///
/// Immutable once admitted to the pipeline: the sanitizer/validator in
/// `reflow_pipeline` is the only constructor path for server traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Sanitized input content (100-10,000 chars)
    pub content: String,
    /// Requested platforms (1-6, no duplicates), order preserved in outputs
    pub platforms: Vec<Platform>,
    /// Creative voice applied to every platform
    pub tone: Tone,
}
