//! Process-local streak store with revision checks.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{StreakRepository, StreakRepositoryError};
use crate::domain::{StreakState, UserId};

/// Streak repository backed by a map in memory.
#[derive(Debug, Default)]
pub struct InMemoryStreakRepository {
    rows: Mutex<HashMap<UserId, StreakState>>,
}

impl InMemoryStreakRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> Result<MutexGuard<'_, HashMap<UserId, StreakState>>, StreakRepositoryError> {
        self.rows
            .lock()
            .map_err(|_| StreakRepositoryError::query("streak store lock poisoned"))
    }
}

#[async_trait]
impl StreakRepository for InMemoryStreakRepository {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StreakState>, StreakRepositoryError> {
        Ok(self.rows()?.get(user_id).cloned())
    }

    async fn save(
        &self,
        state: &StreakState,
        expected_revision: Option<u32>,
    ) -> Result<(), StreakRepositoryError> {
        let mut rows = self.rows()?;
        let stored = rows.get(&state.user_id).map(|row| row.revision);
        match (expected_revision, stored) {
            (None, None) => {}
            (Some(expected), Some(actual)) if expected == actual => {}
            (expected, actual) => {
                return Err(StreakRepositoryError::revision_mismatch(
                    expected.unwrap_or(0),
                    actual.unwrap_or(0),
                ));
            }
        }
        rows.insert(state.user_id.clone(), state.clone());
        Ok(())
    }
}
