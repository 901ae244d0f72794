//! Request rate gate.
//!
//! In-process keyed counters using governor's GCRA limiters. The gate is
//! optional: when rate limiting is not enabled the gate sits in an explicit
//! [`RateGate::Disabled`] state and admits everything, logging a warning at
//! construction so the deployment choice is visible.

use governor::clock::{Clock, DefaultClock};
use governor::middleware::StateInformationMiddleware;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reflow_error::{PolicyError, PolicyErrorKind, PolicyResult};
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::{debug, warn};

type KeyedLimiter =
    RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock, StateInformationMiddleware>;
type GlobalLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, StateInformationMiddleware>;

/// Which counter produced a rate decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateScope {
    /// Per-user counter
    User,
    /// Per-client-address counter
    Ip,
    /// Whole-service counter
    Global,
}

/// Outcome of a rate check.
///
/// `limit` and `remaining` describe the scope named in `scope`; for an
/// allowed request that is always the user counter, for a denial it is
/// whichever counter tripped. `retry_after` is present only on denial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateDecision {
    /// Whether the request may proceed
    pub allowed: bool,
    /// The counter this decision describes
    pub scope: RateScope,
    /// Requests permitted per window in that scope
    pub limit: u32,
    /// Requests left in the current window
    pub remaining: u32,
    /// How long to wait before retrying, on denial
    pub retry_after: Option<Duration>,
}

/// Per-minute window sizes for the three counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateGateConfig {
    /// Requests per minute per user
    pub user_per_minute: u32,
    /// Requests per minute per client address
    pub ip_per_minute: u32,
    /// Requests per minute across the whole service
    pub global_per_minute: u32,
}

impl Default for RateGateConfig {
    fn default() -> Self {
        Self {
            user_per_minute: 10,
            ip_per_minute: 20,
            global_per_minute: 1000,
        }
    }
}

/// Live counters backing an enabled gate.
pub struct Limiters {
    user: KeyedLimiter,
    ip: KeyedLimiter,
    global: GlobalLimiter,
    clock: DefaultClock,
}

/// The request rate gate.
///
/// Checks run user, then ip, then global; the first counter to deny wins.
/// All three counters are consumed on an allowed request.
pub enum RateGate {
    /// Counters are active
    Enabled(Box<Limiters>),
    /// No rate limiting; every check admits
    Disabled,
}

impl std::fmt::Debug for RateGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enabled(_) => write!(f, "RateGate::Enabled"),
            Self::Disabled => write!(f, "RateGate::Disabled"),
        }
    }
}

fn per_minute(label: &str, requests: u32) -> PolicyResult<Quota> {
    let n = NonZeroU32::new(requests).ok_or_else(|| {
        PolicyError::new(PolicyErrorKind::InvalidRateConfig(format!(
            "{} window must be nonzero",
            label
        )))
    })?;
    Ok(Quota::per_minute(n))
}

impl RateGate {
    /// Builds an active gate from explicit window sizes.
    pub fn enabled(config: RateGateConfig) -> PolicyResult<Self> {
        let user = RateLimiter::keyed(per_minute("user", config.user_per_minute)?)
            .with_middleware::<StateInformationMiddleware>();
        let ip = RateLimiter::keyed(per_minute("ip", config.ip_per_minute)?)
            .with_middleware::<StateInformationMiddleware>();
        let global = RateLimiter::direct(per_minute("global", config.global_per_minute)?)
            .with_middleware::<StateInformationMiddleware>();
        Ok(Self::Enabled(Box::new(Limiters {
            user,
            ip,
            global,
            clock: DefaultClock::default(),
        })))
    }

    /// Builds the gate from the environment.
    ///
    /// Active when `RATE_LIMIT_ENABLED` is `true` or `1`; otherwise the gate
    /// is disabled and every request is admitted.
    pub fn from_env() -> PolicyResult<Self> {
        let enabled = std::env::var("RATE_LIMIT_ENABLED")
            .map(|raw| matches!(raw.as_str(), "true" | "1"))
            .unwrap_or(false);
        if enabled {
            Self::enabled(RateGateConfig::default())
        } else {
            warn!("Rate limiting disabled; set RATE_LIMIT_ENABLED=true to enable");
            Ok(Self::Disabled)
        }
    }

    /// Whether the counters are active.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Runs all three counters for one request.
    pub fn check(&self, user_id: &str, ip: &str) -> RateDecision {
        let limiters = match self {
            Self::Enabled(limiters) => limiters,
            Self::Disabled => {
                return RateDecision {
                    allowed: true,
                    scope: RateScope::User,
                    limit: 999_999,
                    remaining: 999_999,
                    retry_after: None,
                };
            }
        };

        let now = limiters.clock.now();

        let user_snapshot = match limiters.user.check_key(&user_id.to_string()) {
            Ok(snapshot) => snapshot,
            Err(not_until) => {
                debug!(user_id, "User rate limit exceeded");
                return RateDecision {
                    allowed: false,
                    scope: RateScope::User,
                    limit: not_until.quota().burst_size().get(),
                    remaining: 0,
                    retry_after: Some(not_until.wait_time_from(now)),
                };
            }
        };

        if let Err(not_until) = limiters.ip.check_key(&ip.to_string()) {
            debug!(ip, "IP rate limit exceeded");
            return RateDecision {
                allowed: false,
                scope: RateScope::Ip,
                limit: not_until.quota().burst_size().get(),
                remaining: 0,
                retry_after: Some(not_until.wait_time_from(now)),
            };
        }

        if let Err(not_until) = limiters.global.check() {
            debug!("Global rate limit exceeded");
            return RateDecision {
                allowed: false,
                scope: RateScope::Global,
                limit: not_until.quota().burst_size().get(),
                remaining: 0,
                retry_after: Some(not_until.wait_time_from(now)),
            };
        }

        RateDecision {
            allowed: true,
            scope: RateScope::User,
            limit: user_snapshot.quota().burst_size().get(),
            remaining: user_snapshot.remaining_burst_capacity(),
            retry_after: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(user: u32, ip: u32, global: u32) -> RateGate {
        RateGate::enabled(RateGateConfig {
            user_per_minute: user,
            ip_per_minute: ip,
            global_per_minute: global,
        })
        .unwrap()
    }

    #[test]
    fn disabled_gate_admits_everything() {
        let gate = RateGate::Disabled;
        assert!(!gate.is_enabled());
        for _ in 0..100 {
            assert!(gate.check("user-1", "10.0.0.1").allowed);
        }
    }

    #[test]
    fn user_window_denies_after_limit() {
        let gate = gate(3, 100, 1000);
        for _ in 0..3 {
            assert!(gate.check("user-1", "10.0.0.1").allowed);
        }
        let decision = gate.check("user-1", "10.0.0.1");
        assert!(!decision.allowed);
        assert_eq!(decision.scope, RateScope::User);
        assert_eq!(decision.limit, 3);
        assert_eq!(decision.remaining, 0);
        assert!(decision.retry_after.is_some());
    }

    #[test]
    fn user_windows_are_independent() {
        let gate = gate(2, 100, 1000);
        assert!(gate.check("user-1", "10.0.0.1").allowed);
        assert!(gate.check("user-1", "10.0.0.1").allowed);
        assert!(!gate.check("user-1", "10.0.0.1").allowed);
        assert!(gate.check("user-2", "10.0.0.2").allowed);
    }

    #[test]
    fn ip_window_denies_across_users() {
        let gate = gate(100, 2, 1000);
        assert!(gate.check("user-1", "10.0.0.1").allowed);
        assert!(gate.check("user-2", "10.0.0.1").allowed);
        let decision = gate.check("user-3", "10.0.0.1");
        assert!(!decision.allowed);
        assert_eq!(decision.scope, RateScope::Ip);
        assert_eq!(decision.limit, 2);
    }

    #[test]
    fn global_window_denies_everything() {
        let gate = gate(100, 100, 2);
        assert!(gate.check("user-1", "10.0.0.1").allowed);
        assert!(gate.check("user-2", "10.0.0.2").allowed);
        let decision = gate.check("user-3", "10.0.0.3");
        assert!(!decision.allowed);
        assert_eq!(decision.scope, RateScope::Global);
    }

    #[test]
    fn allowed_decision_reports_user_scope_window() {
        let gate = gate(5, 100, 1000);
        let decision = gate.check("user-1", "10.0.0.1");
        assert!(decision.allowed);
        assert_eq!(decision.scope, RateScope::User);
        assert_eq!(decision.limit, 5);
        assert_eq!(decision.remaining, 4);
        assert_eq!(decision.retry_after, None);
    }

    #[test]
    fn zero_window_is_rejected() {
        let err = RateGate::enabled(RateGateConfig {
            user_per_minute: 0,
            ip_per_minute: 20,
            global_per_minute: 1000,
        })
        .unwrap_err();
        assert!(matches!(
            err.kind(),
            PolicyErrorKind::InvalidRateConfig(_)
        ));
    }
}
