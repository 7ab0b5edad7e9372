//! Check-in domain service.
//!
//! Implements the check-in driving ports: admission, classification,
//! storage and streak tracking for submissions, plus the read-side queries.
//! Work for one subject is serialised so admission-then-insert and
//! streak read-modify-write never interleave within a process; the
//! repository's atomic insert covers writers in other processes.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    AcceptedCheckIn, CheckInCommand, CheckInOutcome, CheckInQuery, CheckInRepository,
    CheckInRepositoryError, CheckInRequest, HistoryPage, HistoryRequest, StreakRepository,
    StreakRepositoryError,
};
use crate::domain::{
    AdmissionDecision, AdmissionPolicy, CheckIn, CheckInCalendar, CheckInSubject, Error,
    MoodClassifier, MoodText, StreakState, SubjectLocks, UserId, VibeStats,
};

fn map_check_in_error(error: CheckInRepositoryError) -> Error {
    match error {
        CheckInRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("check-in repository unavailable: {message}"))
        }
        CheckInRepositoryError::Query { message } => {
            Error::internal(format!("check-in repository error: {message}"))
        }
    }
}

fn map_streak_error(error: StreakRepositoryError) -> Error {
    match error {
        StreakRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("streak repository unavailable: {message}"))
        }
        StreakRepositoryError::Query { message } => {
            Error::internal(format!("streak repository error: {message}"))
        }
        StreakRepositoryError::RevisionMismatch { expected, actual } => {
            Error::conflict("streak revision mismatch").with_details(json!({
                "expectedRevision": expected,
                "actualRevision": actual,
                "code": "revision_mismatch",
            }))
        }
    }
}

/// Check-in service implementing [`CheckInCommand`] and [`CheckInQuery`].
#[derive(Clone)]
pub struct CheckInService<C, S> {
    check_in_repo: Arc<C>,
    streak_repo: Arc<S>,
    classifier: MoodClassifier,
    clock: Arc<dyn Clock>,
    calendar: CheckInCalendar,
    policy: AdmissionPolicy,
    locks: Arc<SubjectLocks>,
}

impl<C, S> CheckInService<C, S> {
    /// Create a service with a UTC calendar and the default guest allowance.
    pub fn new(
        check_in_repo: Arc<C>,
        streak_repo: Arc<S>,
        classifier: MoodClassifier,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            check_in_repo,
            streak_repo,
            classifier,
            clock,
            calendar: CheckInCalendar::utc(),
            policy: AdmissionPolicy::default(),
            locks: Arc::new(SubjectLocks::default()),
        }
    }

    /// Use `calendar` to decide which day a check-in belongs to.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CheckInCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Use `policy` for admission decisions.
    #[must_use]
    pub fn with_admission_policy(mut self, policy: AdmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The current calendar day.
    pub fn current_day(&self) -> NaiveDate {
        self.calendar.today(self.clock.as_ref())
    }
}

impl<C, S> CheckInService<C, S>
where
    C: CheckInRepository,
    S: StreakRepository,
{
    /// Decide whether `subject` may check in on `day`, without writing.
    pub async fn admit(
        &self,
        subject: &CheckInSubject,
        day: NaiveDate,
    ) -> Result<AdmissionDecision, Error> {
        match subject {
            CheckInSubject::User(user_id) => {
                let existing = self
                    .check_in_repo
                    .find_for_user_on(user_id, day)
                    .await
                    .map_err(map_check_in_error)?;
                Ok(self.policy.admit_user(existing.is_some()))
            }
            CheckInSubject::Device(device_id) => {
                let count = self
                    .check_in_repo
                    .count_for_device_on(device_id, day)
                    .await
                    .map_err(map_check_in_error)?;
                Ok(self.policy.admit_device(count))
            }
        }
    }

    /// Apply one accepted check-in on `day` to the user's streak.
    pub async fn update_streak(
        &self,
        user_id: &UserId,
        day: NaiveDate,
    ) -> Result<StreakState, Error> {
        let existing = self
            .streak_repo
            .find_by_user_id(user_id)
            .await
            .map_err(map_streak_error)?;

        let update = StreakState::advance(existing.as_ref(), user_id.clone(), day);
        debug!(transition = update.label(), %day, "streak updated");
        if update.is_change() {
            let expected_revision = existing.as_ref().map(|state| state.revision);
            self.streak_repo
                .save(update.state(), expected_revision)
                .await
                .map_err(map_streak_error)?;
        }
        Ok(update.into_state())
    }

    async fn store(&self, check_in: &CheckIn) -> Result<AdmissionDecision, Error> {
        self.check_in_repo
            .insert_if_admitted(check_in, self.policy)
            .await
            .map_err(map_check_in_error)
    }
}

fn rejected(
    decision: AdmissionDecision,
    subject: &CheckInSubject,
    day: NaiveDate,
) -> Option<CheckInOutcome> {
    let outcome = match decision {
        AdmissionDecision::Accepted => return None,
        AdmissionDecision::Duplicate => CheckInOutcome::Duplicate,
        AdmissionDecision::QuotaExceeded { limit } => CheckInOutcome::QuotaExceeded { limit },
    };
    info!(subject = subject.kind(), %day, ?decision, "check-in rejected");
    Some(outcome)
}

#[async_trait]
impl<C, S> CheckInCommand for CheckInService<C, S>
where
    C: CheckInRepository,
    S: StreakRepository,
{
    async fn check_in(&self, request: CheckInRequest) -> Result<CheckInOutcome, Error> {
        let CheckInRequest { subject, mood_text } = request;
        let mood_text = MoodText::new(mood_text).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "moodText" }))
        })?;

        let _guard = self.locks.acquire(&subject.lock_key()).await;
        let day = self.current_day();

        if let Some(outcome) = rejected(self.admit(&subject, day).await?, &subject, day) {
            return Ok(outcome);
        }

        let classification = self.classifier.classify(mood_text.as_str()).await;
        let source = classification.source;
        let check_in = CheckIn::new(subject, day, mood_text, classification, self.clock.utc());

        if let Some(outcome) = rejected(self.store(&check_in).await?, &check_in.subject, day) {
            return Ok(outcome);
        }

        let streak = match check_in.subject.user_id() {
            Some(user_id) => Some(self.update_streak(user_id, day).await.inspect_err(|error| {
                warn!(
                    subject = check_in.subject.kind(),
                    %day,
                    check_in_id = %check_in.id,
                    code = ?error.code(),
                    "check-in stored but streak update failed"
                );
            })?),
            None => None,
        };

        info!(
            subject = check_in.subject.kind(),
            %day,
            aesthetic = %check_in.aesthetic,
            ?source,
            "check-in accepted"
        );
        Ok(CheckInOutcome::Accepted(Box::new(AcceptedCheckIn {
            check_in,
            streak,
        })))
    }
}

#[async_trait]
impl<C, S> CheckInQuery for CheckInService<C, S>
where
    C: CheckInRepository,
    S: StreakRepository,
{
    async fn today(&self, user_id: &UserId) -> Result<Option<CheckIn>, Error> {
        self.check_in_repo
            .find_for_user_on(user_id, self.current_day())
            .await
            .map_err(map_check_in_error)
    }

    async fn history(&self, request: HistoryRequest) -> Result<HistoryPage, Error> {
        let limit = request.effective_limit();
        let page = self
            .check_in_repo
            .list_for_user(&request.user_id, limit, request.offset)
            .await
            .map_err(map_check_in_error)?;

        Ok(HistoryPage {
            items: page.items,
            total: page.total,
            limit,
            offset: request.offset,
        })
    }

    async fn stats(&self, user_id: &UserId) -> Result<VibeStats, Error> {
        let streak = self
            .streak_repo
            .find_by_user_id(user_id)
            .await
            .map_err(map_streak_error)?;
        let check_ins = self
            .check_in_repo
            .all_for_user(user_id)
            .await
            .map_err(map_check_in_error)?;

        Ok(VibeStats::summarise(streak.as_ref(), &check_ins))
    }
}

#[cfg(test)]
#[path = "check_in_service_tests.rs"]
mod tests;
