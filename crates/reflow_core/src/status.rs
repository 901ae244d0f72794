//! Persisted generation record status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a persisted generation record.
///
/// Individual platform failures do not fail the record: a run with mixed
/// outcomes still completes, with per-platform errors embedded in its
/// outputs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationStatus {
    /// Record created, orchestration not yet finished
    Pending,
    /// Orchestrator returned; outputs written
    Completed,
    /// Stage 1 (or admission-adjacent persistence) failed
    Failed,
    /// Reserved for mixed-outcome runs
    Partial,
}
