//! Monthly generation quota.
//!
//! The quota decision is pure: it takes a snapshot of the user's stored
//! usage counters and the current time, and reports whether a generation may
//! proceed and whether the month has rolled over since the counters were
//! last reset. Persisting the rollover is the caller's job and must be done
//! with a conditional update keyed on the stored reset time, so concurrent
//! requests cannot double-reset.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use reflow_core::Tier;
use reflow_error::{PolicyError, PolicyErrorKind, PolicyResult};

/// Stored usage counters for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageSnapshot {
    /// Generations consumed in the current month
    pub used: i32,
    /// Generations permitted per month
    pub limit: i32,
    /// When the current month's counters lapse
    pub resets_at: DateTime<Utc>,
}

/// Outcome of a quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaDecision {
    /// Whether a generation may proceed
    pub allowed: bool,
    /// Effective generations consumed (zero after a lapsed window)
    pub used: i32,
    /// Generations permitted per month
    pub limit: i32,
    /// Generations left in the window
    pub remaining: i32,
    /// When the window lapses
    pub resets_at: DateTime<Utc>,
    /// Whether the stored counters lapsed and must be reset
    pub reset_due: bool,
}

/// Monthly generation limit for a tier.
pub fn generation_limit(tier: Tier) -> i32 {
    match tier {
        Tier::Free => 10,
        Tier::Pro => 500,
        // Effectively unlimited
        Tier::Business => 999_999,
    }
}

/// Midnight UTC on the first day of the month after `now`.
pub fn next_reset(now: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
        .unwrap_or(now)
}

/// Decides whether one generation fits inside the monthly quota.
///
/// When the stored window has lapsed (`resets_at <= now`) the decision is
/// computed against a fresh window: `used` is treated as zero, `resets_at`
/// moves to the next month boundary, and `reset_due` is set so the caller
/// knows to persist the rollover.
pub fn check_quota(snapshot: &UsageSnapshot, now: DateTime<Utc>) -> PolicyResult<QuotaDecision> {
    if snapshot.limit <= 0 {
        return Err(PolicyError::new(PolicyErrorKind::InvalidSnapshot(format!(
            "nonpositive generation limit {}",
            snapshot.limit
        ))));
    }
    if snapshot.used < 0 {
        return Err(PolicyError::new(PolicyErrorKind::InvalidSnapshot(format!(
            "negative usage count {}",
            snapshot.used
        ))));
    }

    if snapshot.resets_at <= now {
        return Ok(QuotaDecision {
            allowed: true,
            used: 0,
            limit: snapshot.limit,
            remaining: snapshot.limit,
            resets_at: next_reset(now),
            reset_due: true,
        });
    }

    let remaining = (snapshot.limit - snapshot.used).max(0);
    Ok(QuotaDecision {
        allowed: snapshot.used < snapshot.limit,
        used: snapshot.used,
        limit: snapshot.limit,
        remaining,
        resets_at: snapshot.resets_at,
        reset_due: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn limits_match_tiers() {
        assert_eq!(generation_limit(Tier::Free), 10);
        assert_eq!(generation_limit(Tier::Pro), 500);
        assert_eq!(generation_limit(Tier::Business), 999_999);
    }

    #[test]
    fn next_reset_is_first_of_next_month() {
        let reset = next_reset(at(2026, 3, 15));
        assert_eq!(reset, Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn next_reset_rolls_over_december() {
        let reset = next_reset(at(2026, 12, 31));
        assert_eq!(reset, Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn under_limit_allows() {
        let snapshot = UsageSnapshot {
            used: 4,
            limit: 10,
            resets_at: at(2026, 4, 1),
        };
        let decision = check_quota(&snapshot, at(2026, 3, 15)).unwrap();
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 6);
        assert!(!decision.reset_due);
        assert_eq!(decision.resets_at, snapshot.resets_at);
    }

    #[test]
    fn at_limit_denies() {
        let snapshot = UsageSnapshot {
            used: 10,
            limit: 10,
            resets_at: at(2026, 4, 1),
        };
        let decision = check_quota(&snapshot, at(2026, 3, 15)).unwrap();
        assert!(!decision.allowed);
        assert_eq!(decision.remaining, 0);
    }

    #[test]
    fn lapsed_window_allows_and_flags_reset() {
        let snapshot = UsageSnapshot {
            used: 10,
            limit: 10,
            resets_at: at(2026, 3, 1),
        };
        let now = at(2026, 3, 15);
        let decision = check_quota(&snapshot, now).unwrap();
        assert!(decision.allowed);
        assert!(decision.reset_due);
        assert_eq!(decision.used, 0);
        assert_eq!(decision.remaining, 10);
        assert_eq!(decision.resets_at, next_reset(now));
    }

    #[test]
    fn overshoot_clamps_remaining_to_zero() {
        let snapshot = UsageSnapshot {
            used: 13,
            limit: 10,
            resets_at: at(2026, 4, 1),
        };
        let decision = check_quota(&snapshot, at(2026, 3, 15)).unwrap();
        assert!(!decision.allowed);
        assert_eq!(decision.remaining, 0);
    }

    #[test]
    fn impossible_snapshots_are_rejected() {
        let bad_limit = UsageSnapshot {
            used: 0,
            limit: 0,
            resets_at: at(2026, 4, 1),
        };
        assert!(check_quota(&bad_limit, at(2026, 3, 15)).is_err());

        let bad_used = UsageSnapshot {
            used: -1,
            limit: 10,
            resets_at: at(2026, 4, 1),
        };
        assert!(check_quota(&bad_used, at(2026, 3, 15)).is_err());
    }
}
