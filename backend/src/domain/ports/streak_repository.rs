//! Port for streak persistence.
//!
//! Streak rows are updated read-modify-write with optimistic concurrency:
//! writers pass the revision they read and adapters reject stale writes.

use async_trait::async_trait;

use crate::domain::{StreakState, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by streak repository adapters.
    pub enum StreakRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "streak repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "streak repository query failed: {message}",
        /// Optimistic concurrency check failed.
        RevisionMismatch { expected: u32, actual: u32 } =>
            "revision mismatch: expected {expected}, found {actual}",
    }
}

/// Port for streak storage and retrieval.
///
/// # Revision Semantics
///
/// - A user's first streak is saved with `expected_revision: None`; it fails
///   with [`StreakRepositoryError::RevisionMismatch`] if a row already
///   exists.
/// - Later saves pass `Some(n)` and succeed only while the stored revision
///   is `n`.
/// - Callers set `state.revision` before saving; adapters never bump it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StreakRepository: Send + Sync {
    /// Fetch the streak for a user. `None` until the first check-in.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StreakState>, StreakRepositoryError>;

    /// Save a streak with an optimistic concurrency check.
    async fn save(
        &self,
        state: &StreakState,
        expected_revision: Option<u32>,
    ) -> Result<(), StreakRepositoryError>;
}

/// Fixture implementation that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureStreakRepository;

#[async_trait]
impl StreakRepository for FixtureStreakRepository {
    async fn find_by_user_id(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<StreakState>, StreakRepositoryError> {
        Ok(None)
    }

    async fn save(
        &self,
        _state: &StreakState,
        _expected_revision: Option<u32>,
    ) -> Result<(), StreakRepositoryError> {
        Ok(())
    }
}
