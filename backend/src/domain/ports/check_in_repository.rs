//! Port for check-in persistence.
//!
//! The [`CheckInRepository`] owns the per-day uniqueness rules. Inserts are
//! atomic with the admission check: a user row is written only if none
//! exists for that day, and a guest row only while the device is under its
//! daily allowance.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{AdmissionDecision, AdmissionPolicy, CheckIn, DeviceId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by check-in repository adapters.
    pub enum CheckInRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "check-in repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "check-in repository query failed: {message}",
    }
}

/// One page of a user's check-ins, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckInPage {
    /// Check-ins in the requested window.
    pub items: Vec<CheckIn>,
    /// Number of check-ins the user has in total.
    pub total: u64,
}

/// Port for check-in storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Insert `check_in` if the admission rules still hold.
    ///
    /// Returns the decision taken under the same isolation as the write.
    /// Nothing is written unless the decision is
    /// [`AdmissionDecision::Accepted`].
    async fn insert_if_admitted(
        &self,
        check_in: &CheckIn,
        policy: AdmissionPolicy,
    ) -> Result<AdmissionDecision, CheckInRepositoryError>;

    /// Fetch a user's check-in for `date`, if any.
    async fn find_for_user_on(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, CheckInRepositoryError>;

    /// Count a guest device's check-ins on `date`.
    async fn count_for_device_on(
        &self,
        device_id: &DeviceId,
        date: NaiveDate,
    ) -> Result<u32, CheckInRepositoryError>;

    /// List a user's check-ins, newest date first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
        offset: u32,
    ) -> Result<CheckInPage, CheckInRepositoryError>;

    /// Every check-in the user has made, newest date first.
    async fn all_for_user(&self, user_id: &UserId) -> Result<Vec<CheckIn>, CheckInRepositoryError>;
}

/// Fixture implementation for testing without storage.
///
/// Accepts every insert and reports no existing rows.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCheckInRepository;

#[async_trait]
impl CheckInRepository for FixtureCheckInRepository {
    async fn insert_if_admitted(
        &self,
        _check_in: &CheckIn,
        _policy: AdmissionPolicy,
    ) -> Result<AdmissionDecision, CheckInRepositoryError> {
        Ok(AdmissionDecision::Accepted)
    }

    async fn find_for_user_on(
        &self,
        _user_id: &UserId,
        _date: NaiveDate,
    ) -> Result<Option<CheckIn>, CheckInRepositoryError> {
        Ok(None)
    }

    async fn count_for_device_on(
        &self,
        _device_id: &DeviceId,
        _date: NaiveDate,
    ) -> Result<u32, CheckInRepositoryError> {
        Ok(0)
    }

    async fn list_for_user(
        &self,
        _user_id: &UserId,
        _limit: u32,
        _offset: u32,
    ) -> Result<CheckInPage, CheckInRepositoryError> {
        Ok(CheckInPage::default())
    }

    async fn all_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<CheckIn>, CheckInRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn fixture_repository_reports_no_rows() {
        let repo = FixtureCheckInRepository;
        let user_id = UserId::random();
        let date = NaiveDate::from_ymd_opt(2026, 4, 2).expect("date");

        assert!(
            repo.find_for_user_on(&user_id, date)
                .await
                .expect("lookup")
                .is_none()
        );
        let page = repo.list_for_user(&user_id, 20, 0).await.expect("list");
        assert_eq!(page.total, 0);
    }

    #[rstest]
    fn query_error_formats_message() {
        let error = CheckInRepositoryError::query("deadlock");
        assert_eq!(
            error.to_string(),
            "check-in repository query failed: deadlock"
        );
    }
}
