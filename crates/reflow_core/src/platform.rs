//! Target platform enumeration.

use serde::{Deserialize, Serialize};

/// A social/content destination for generated output.
///
/// The set is closed: every platform carries its own structured output shape
/// (see [`crate::PlatformContent`]) and its own prompt templates, so adding a
/// variant is a compile-time-visible change across the workspace.
///
/// # Examples
///
/// ```
/// use reflow_core::Platform;
///
/// assert_eq!(Platform::TikTok.to_string(), "tiktok");
/// assert_eq!("linkedin".parse::<Platform>().unwrap(), Platform::LinkedIn);
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
pub enum Platform {
    /// Short-video script (TikTok / Reels)
    TikTok,
    /// Microblog thread (Twitter / X)
    Twitter,
    /// Professional-network post
    LinkedIn,
    /// Photo-network caption and carousel
    Instagram,
    /// Lightweight microblog thread
    Threads,
    /// Email newsletter
    Email,
}

impl Platform {
    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok / Reels",
            Platform::Twitter => "Twitter / X",
            Platform::LinkedIn => "LinkedIn",
            Platform::Instagram => "Instagram",
            Platform::Threads => "Threads",
            Platform::Email => "Email Newsletter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn serde_round_trip_uses_lowercase_tags() {
        let json = serde_json::to_string(&Platform::Email).unwrap();
        assert_eq!(json, "\"email\"");
        let back: Platform = serde_json::from_str("\"tiktok\"").unwrap();
        assert_eq!(back, Platform::TikTok);
    }

    #[test]
    fn six_platforms() {
        assert_eq!(Platform::iter().count(), 6);
    }
}
