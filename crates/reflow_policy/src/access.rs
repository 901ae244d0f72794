//! Tier and trial platform access.
//!
//! Free accounts get every platform for a short trial window after signup,
//! then drop back to the free set. Paid tiers are unrestricted.

use chrono::{DateTime, Duration, Utc};
use reflow_core::{Platform, Tier, TierStatus};
use strum::IntoEnumIterator;

/// Length of the free-tier trial window, from account creation.
pub const TRIAL_DURATION_DAYS: i64 = 3;

/// Platforms available to free accounts outside the trial window.
pub const FREE_PLATFORMS: [Platform; 2] = [Platform::Threads, Platform::LinkedIn];

/// When the trial window ends for an account created at `created_at`.
pub fn trial_end(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at + Duration::days(TRIAL_DURATION_DAYS)
}

/// Whether the trial window is still open at `now`.
pub fn trial_active(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now < trial_end(created_at)
}

fn all_platforms() -> Vec<Platform> {
    Platform::iter().collect()
}

fn available_platforms(tier: Tier, created_at: DateTime<Utc>, now: DateTime<Utc>) -> Vec<Platform> {
    match tier {
        Tier::Pro | Tier::Business => all_platforms(),
        Tier::Free => {
            if trial_active(created_at, now) {
                all_platforms()
            } else {
                FREE_PLATFORMS.to_vec()
            }
        }
    }
}

fn locked_platforms(tier: Tier, created_at: DateTime<Utc>, now: DateTime<Utc>) -> Vec<Platform> {
    match tier {
        Tier::Pro | Tier::Business => Vec::new(),
        Tier::Free => {
            if trial_active(created_at, now) {
                Vec::new()
            } else {
                Platform::iter()
                    .filter(|platform| !FREE_PLATFORMS.contains(platform))
                    .collect()
            }
        }
    }
}

/// Outcome of a platform access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    /// Whether every requested platform is available
    pub allowed: bool,
    /// Requested platforms the tier does not cover, in request order
    pub denied: Vec<Platform>,
}

/// Checks every requested platform against the tier's available set.
///
/// All denials are collected rather than failing fast, so the caller can
/// name every locked platform in one response.
pub fn check_platform_access(
    requested: &[Platform],
    tier: Tier,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> AccessDecision {
    let available = available_platforms(tier, created_at, now);
    let denied: Vec<Platform> = requested
        .iter()
        .copied()
        .filter(|platform| !available.contains(platform))
        .collect();
    AccessDecision {
        allowed: denied.is_empty(),
        denied,
    }
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator - 1) / denominator
}

/// Derives the full tier status for one account at one point in time.
///
/// Trial fields are populated only for free accounts; paid tiers report no
/// trial window at all.
pub fn tier_status(tier: Tier, created_at: DateTime<Utc>, now: DateTime<Utc>) -> TierStatus {
    let is_free = tier == Tier::Free;
    let active = is_free && trial_active(created_at, now);
    let end = trial_end(created_at);
    let seconds_left = (end - now).num_seconds();

    TierStatus {
        tier,
        trial_active: active,
        trial_expired: is_free && !active,
        trial_days_remaining: if is_free {
            ceil_div(seconds_left, 86_400).max(0)
        } else {
            0
        },
        trial_hours_remaining: if is_free {
            ceil_div(seconds_left, 3_600).max(0)
        } else {
            0
        },
        trial_end_date: is_free.then_some(end),
        available_platforms: available_platforms(tier, created_at, now),
        locked_platforms: locked_platforms(tier, created_at, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, h, 0, 0).unwrap()
    }

    #[test]
    fn trial_grants_every_platform() {
        let created = at(10, 0);
        let now = at(11, 0);
        let decision = check_platform_access(
            &[Platform::TikTok, Platform::Email],
            Tier::Free,
            created,
            now,
        );
        assert!(decision.allowed);
        assert!(decision.denied.is_empty());
    }

    #[test]
    fn expired_trial_locks_paid_platforms() {
        let created = at(1, 0);
        let now = at(10, 0);
        let decision = check_platform_access(
            &[
                Platform::Threads,
                Platform::TikTok,
                Platform::LinkedIn,
                Platform::Email,
            ],
            Tier::Free,
            created,
            now,
        );
        assert!(!decision.allowed);
        assert_eq!(decision.denied, vec![Platform::TikTok, Platform::Email]);
    }

    #[test]
    fn paid_tiers_are_unrestricted() {
        let created = at(1, 0);
        let now = at(20, 0);
        for tier in [Tier::Pro, Tier::Business] {
            let decision = check_platform_access(
                &[Platform::TikTok, Platform::Instagram],
                tier,
                created,
                now,
            );
            assert!(decision.allowed);
        }
    }

    #[test]
    fn trial_boundary_is_exclusive() {
        let created = at(1, 0);
        let end = trial_end(created);
        assert!(trial_active(created, end - Duration::seconds(1)));
        assert!(!trial_active(created, end));
    }

    #[test]
    fn free_status_during_trial() {
        let created = at(10, 0);
        let now = at(10, 12);
        let status = tier_status(Tier::Free, created, now);
        assert!(status.trial_active);
        assert!(!status.trial_expired);
        assert_eq!(status.trial_days_remaining, 3);
        assert_eq!(status.trial_hours_remaining, 60);
        assert_eq!(status.trial_end_date, Some(trial_end(created)));
        assert_eq!(status.locked_platforms, Vec::<Platform>::new());
    }

    #[test]
    fn free_status_after_trial() {
        let created = at(1, 0);
        let now = at(20, 0);
        let status = tier_status(Tier::Free, created, now);
        assert!(!status.trial_active);
        assert!(status.trial_expired);
        assert_eq!(status.trial_days_remaining, 0);
        assert_eq!(status.trial_hours_remaining, 0);
        assert_eq!(
            status.available_platforms,
            vec![Platform::Threads, Platform::LinkedIn]
        );
        assert_eq!(status.locked_platforms.len(), 4);
    }

    #[test]
    fn paid_status_has_no_trial_window() {
        let created = at(10, 0);
        let now = at(10, 12);
        let status = tier_status(Tier::Pro, created, now);
        assert!(!status.trial_active);
        assert!(!status.trial_expired);
        assert_eq!(status.trial_days_remaining, 0);
        assert_eq!(status.trial_end_date, None);
        assert_eq!(status.locked_platforms, Vec::<Platform>::new());
    }
}
