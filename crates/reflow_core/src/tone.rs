//! Creative voice applied uniformly across one generation request.

use serde::{Deserialize, Serialize};

/// Creative voice for generated content.
///
/// # Examples
///
/// ```
/// use reflow_core::Tone;
///
/// assert_eq!(Tone::Educational.to_string(), "educational");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    /// Teach something valuable. Clear and informative.
    Educational,
    /// Casual and relatable. Like talking to a friend.
    Conversational,
    /// Bold takes. Challenge conventional thinking.
    Opinionated,
    /// Expert insights. Data-driven and credible.
    Authority,
}

impl Tone {
    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::Educational => "Educational",
            Tone::Conversational => "Conversational",
            Tone::Opinionated => "Opinionated",
            Tone::Authority => "Authority",
        }
    }
}
