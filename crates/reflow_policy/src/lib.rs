//! Admission policy for generation requests.
//!
//! Three independent gates run before any model call is made:
//!
//! 1. Request rate ([`RateGate`]): keyed per-user, per-ip, and global
//!    counters over a one minute window.
//! 2. Monthly quota ([`check_quota`]): a pure decision over a usage
//!    snapshot, with lazy reset at the month boundary. The caller is
//!    responsible for persisting the reset atomically.
//! 3. Platform access ([`check_platform_access`]): tier and trial rules
//!    deciding which platforms a user may generate for.
//!
//! Denials are ordinary return values, not errors. Errors from this crate
//! mean the gate itself was misconfigured or fed impossible data.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod access;
mod quota;
mod rate;

pub use access::{
    AccessDecision, FREE_PLATFORMS, TRIAL_DURATION_DAYS, check_platform_access, tier_status,
    trial_active, trial_end,
};
pub use quota::{QuotaDecision, UsageSnapshot, check_quota, generation_limit, next_reset};
pub use rate::{RateDecision, RateGate, RateGateConfig, RateScope};
