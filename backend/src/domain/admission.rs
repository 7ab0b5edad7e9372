//! Check-in admission rules.
//!
//! Registered users get one check-in per calendar day. Guest devices get a
//! small daily quota. Decisions are pure; the repository enforces the same
//! rules atomically when the check-in is written.

use serde::{Deserialize, Serialize};

/// Default number of guest check-ins per device per day.
pub const DEFAULT_GUEST_DAILY_LIMIT: u32 = 3;

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdmissionDecision {
    /// The check-in may proceed.
    Accepted,
    /// The user already checked in today.
    Duplicate,
    /// The guest device used its daily allowance.
    QuotaExceeded {
        /// Allowance that was reached.
        limit: u32,
    },
}

/// Limits applied to incoming check-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionPolicy {
    guest_daily_limit: u32,
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_GUEST_DAILY_LIMIT)
    }
}

impl AdmissionPolicy {
    /// Build a policy with the given guest allowance.
    pub const fn new(guest_daily_limit: u32) -> Self {
        Self { guest_daily_limit }
    }

    /// Guest check-ins allowed per device per day.
    pub const fn guest_daily_limit(&self) -> u32 {
        self.guest_daily_limit
    }

    /// Decide for a registered user given whether today already has a row.
    pub const fn admit_user(&self, already_checked_in: bool) -> AdmissionDecision {
        if already_checked_in {
            AdmissionDecision::Duplicate
        } else {
            AdmissionDecision::Accepted
        }
    }

    /// Decide for a guest device given today's existing count.
    ///
    /// # Examples
    /// ```
    /// use vibecheck::domain::{AdmissionDecision, AdmissionPolicy};
    ///
    /// let policy = AdmissionPolicy::new(3);
    /// assert_eq!(policy.admit_device(2), AdmissionDecision::Accepted);
    /// assert_eq!(policy.admit_device(3), AdmissionDecision::QuotaExceeded { limit: 3 });
    /// ```
    pub const fn admit_device(&self, existing_today: u32) -> AdmissionDecision {
        if existing_today >= self.guest_daily_limit {
            AdmissionDecision::QuotaExceeded {
                limit: self.guest_daily_limit,
            }
        } else {
            AdmissionDecision::Accepted
        }
    }
}
