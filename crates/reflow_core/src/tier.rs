//! Subscription tiers and derived tier status.

use crate::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription tier controlling quota and platform breadth.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    /// Two platforms outside the trial window, 10 generations/month
    Free,
    /// All platforms, 500 generations/month
    Pro,
    /// All platforms, effectively unlimited
    Business,
}

/// Derived tier status for one user at one point in time.
///
/// Computed from tier + account age on read; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierStatus {
    /// The user's subscription tier
    pub tier: Tier,
    /// Whether the free-tier trial window is currently active
    pub trial_active: bool,
    /// Whether the free-tier trial window has lapsed
    pub trial_expired: bool,
    /// Whole days remaining in the trial (0 for paid tiers)
    pub trial_days_remaining: i64,
    /// Whole hours remaining in the trial (0 for paid tiers)
    pub trial_hours_remaining: i64,
    /// When the trial ends (None for paid tiers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end_date: Option<DateTime<Utc>>,
    /// Platforms the user may generate for right now
    pub available_platforms: Vec<Platform>,
    /// Platforms locked behind an upgrade
    pub locked_platforms: Vec<Platform>,
}
