//! Driving port for submitting check-ins.
//!
//! Inbound adapters hand over an already-authenticated subject and the raw
//! mood text. Admission rejections come back as outcome values so callers
//! can render distinct messages for each.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{CheckIn, CheckInSubject, Error, StreakState};

/// Request to record one check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    /// User or guest device submitting the entry.
    pub subject: CheckInSubject,
    /// Raw, unvalidated mood text.
    pub mood_text: String,
}

/// A stored check-in plus the streak it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedCheckIn {
    /// The stored record.
    pub check_in: CheckIn,
    /// Updated streak; `None` for guest devices.
    pub streak: Option<StreakState>,
}

/// Result of a check-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckInOutcome {
    /// Stored and, for users, counted towards the streak.
    Accepted(Box<AcceptedCheckIn>),
    /// The user already checked in today.
    Duplicate,
    /// The guest device used its daily allowance.
    QuotaExceeded {
        /// Allowance that was reached.
        limit: u32,
    },
}

/// Driving port for check-in submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInCommand: Send + Sync {
    /// Validate, admit, classify and store one check-in.
    ///
    /// # Errors
    ///
    /// Returns `invalid_request` for bad mood text and
    /// `service_unavailable` when storage cannot be reached.
    async fn check_in(&self, request: CheckInRequest) -> Result<CheckInOutcome, Error>;
}

/// Fixture command that always reports a duplicate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCheckInCommand;

#[async_trait]
impl CheckInCommand for FixtureCheckInCommand {
    async fn check_in(&self, _request: CheckInRequest) -> Result<CheckInOutcome, Error> {
        Ok(CheckInOutcome::Duplicate)
    }
}
