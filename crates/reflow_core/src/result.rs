//! Terminal aggregate of one orchestration run.

use crate::{ContentAnalysis, PlatformOutput};
use serde::{Deserialize, Serialize};

/// The result of one generation run.
///
/// Invariants upheld by the orchestrator:
/// - `outputs.len()` equals the requested platform count, order-preserving
/// - `total_tokens` = analysis tokens + tokens of fulfilled platform calls;
///   failed calls contribute 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Stage-1 analysis shared by every platform call
    pub analysis: ContentAnalysis,
    /// One outcome per requested platform, in request order
    pub outputs: Vec<PlatformOutput>,
    /// Token total across analysis and fulfilled platform calls
    pub total_tokens: u32,
    /// Wall-clock duration of the whole run in milliseconds
    pub generation_time_ms: u64,
    /// Provider that served the analysis call
    pub llm_provider: String,
    /// Model that served the analysis call
    pub llm_model: String,
}
