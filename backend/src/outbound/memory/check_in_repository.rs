//! Process-local check-in store.
//!
//! The admission check and the insert happen under one mutex, giving the
//! same atomicity a database adapter gets from a conditional insert.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::ports::{CheckInPage, CheckInRepository, CheckInRepositoryError};
use crate::domain::{
    AdmissionDecision, AdmissionPolicy, CheckIn, CheckInSubject, DeviceId, UserId,
};

/// Check-in repository backed by a vector in memory.
#[derive(Debug, Default)]
pub struct InMemoryCheckInRepository {
    rows: Mutex<Vec<CheckIn>>,
}

impl InMemoryCheckInRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> Result<MutexGuard<'_, Vec<CheckIn>>, CheckInRepositoryError> {
        self.rows
            .lock()
            .map_err(|_| CheckInRepositoryError::query("check-in store lock poisoned"))
    }
}

fn belongs_to(check_in: &CheckIn, user_id: &UserId) -> bool {
    check_in.subject.user_id() == Some(user_id)
}

fn device_matches(check_in: &CheckIn, device_id: &DeviceId) -> bool {
    matches!(&check_in.subject, CheckInSubject::Device(id) if id == device_id)
}

fn user_rows(rows: &[CheckIn], user_id: &UserId) -> Vec<CheckIn> {
    let mut items: Vec<CheckIn> = rows
        .iter()
        .filter(|row| belongs_to(row, user_id))
        .cloned()
        .collect();
    items.sort_by(|a, b| {
        b.check_date
            .cmp(&a.check_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    items
}

fn decide(rows: &[CheckIn], check_in: &CheckIn, policy: AdmissionPolicy) -> AdmissionDecision {
    let day = check_in.check_date;
    match &check_in.subject {
        CheckInSubject::User(user_id) => policy.admit_user(
            rows.iter()
                .any(|row| row.check_date == day && belongs_to(row, user_id)),
        ),
        CheckInSubject::Device(device_id) => {
            let existing = rows
                .iter()
                .filter(|row| row.check_date == day && device_matches(row, device_id))
                .count();
            policy.admit_device(u32::try_from(existing).unwrap_or(u32::MAX))
        }
    }
}

#[async_trait]
impl CheckInRepository for InMemoryCheckInRepository {
    async fn insert_if_admitted(
        &self,
        check_in: &CheckIn,
        policy: AdmissionPolicy,
    ) -> Result<AdmissionDecision, CheckInRepositoryError> {
        let mut rows = self.rows()?;
        let decision = decide(&rows, check_in, policy);
        if decision == AdmissionDecision::Accepted {
            rows.push(check_in.clone());
        }
        Ok(decision)
    }

    async fn find_for_user_on(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, CheckInRepositoryError> {
        let rows = self.rows()?;
        Ok(rows
            .iter()
            .find(|row| row.check_date == date && belongs_to(row, user_id))
            .cloned())
    }

    async fn count_for_device_on(
        &self,
        device_id: &DeviceId,
        date: NaiveDate,
    ) -> Result<u32, CheckInRepositoryError> {
        let rows = self.rows()?;
        let count = rows
            .iter()
            .filter(|row| row.check_date == date && device_matches(row, device_id))
            .count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
        offset: u32,
    ) -> Result<CheckInPage, CheckInRepositoryError> {
        let all = user_rows(&self.rows()?, user_id);
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok(CheckInPage { items, total })
    }

    async fn all_for_user(&self, user_id: &UserId) -> Result<Vec<CheckIn>, CheckInRepositoryError> {
        Ok(user_rows(&self.rows()?, user_id))
    }
}
