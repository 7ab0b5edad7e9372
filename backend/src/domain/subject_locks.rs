//! Per-subject serialisation for check-in writes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of async locks keyed by subject.
///
/// Entries are dropped once no guard or waiter holds them.
#[derive(Debug, Default)]
pub struct SubjectLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

/// Held while a subject's check-in is in progress.
#[derive(Debug)]
pub struct SubjectGuard {
    _guard: OwnedMutexGuard<()>,
}

impl SubjectLocks {
    /// Wait for exclusive access to `key`.
    pub async fn acquire(&self, key: &str) -> SubjectGuard {
        let lock = {
            let mut locks = self.registry();
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(key.to_owned()).or_default())
        };
        SubjectGuard {
            _guard: lock.lock_owned().await,
        }
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.registry().len()
    }

    /// Whether no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn registry(&self) -> MutexGuard<'_, HashMap<String, Arc<AsyncMutex<()>>>> {
        self.locks
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
