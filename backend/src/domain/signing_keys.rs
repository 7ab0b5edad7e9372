//! Time-bounded cache of identity-provider signing keys.
//!
//! Readers share the cached key set while it is fresh. When the TTL lapses a
//! single writer refreshes it; concurrent readers that queued behind the
//! writer see the new set instead of fetching again. A failed refresh keeps
//! whatever was cached before.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use tokio::sync::RwLock;
use tracing::info;

use super::ports::{SigningKey, SigningKeySource, SigningKeySourceError};

/// Default lifetime of a fetched key set.
pub const DEFAULT_SIGNING_KEY_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Errors returned by [`SigningKeyCache::key_for`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigningKeyError {
    /// No published key has the requested identifier.
    #[error("no signing key with id {kid}")]
    NotFound {
        /// Requested key identifier.
        kid: String,
    },
    /// The key set could not be refreshed.
    #[error("signing keys unavailable: {0}")]
    Unavailable(#[from] SigningKeySourceError),
}

#[derive(Debug)]
struct CachedKeys {
    keys: Arc<[SigningKey]>,
    fetched_at: DateTime<Utc>,
}

/// Shared signing key cache.
pub struct SigningKeyCache<K> {
    source: Arc<K>,
    clock: Arc<dyn Clock>,
    ttl: TimeDelta,
    cached: RwLock<Option<CachedKeys>>,
}

impl<K> SigningKeyCache<K> {
    /// Build an empty cache.
    pub fn new(source: Arc<K>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            cached: RwLock::new(None),
        }
    }

    fn is_fresh(&self, cached: &CachedKeys) -> bool {
        self.clock.utc() - cached.fetched_at < self.ttl
    }
}

impl<K> SigningKeyCache<K>
where
    K: SigningKeySource,
{
    /// Look up a key by identifier, refreshing the set when stale.
    pub async fn key_for(&self, kid: &str) -> Result<SigningKey, SigningKeyError> {
        let keys = self.current_keys().await?;
        keys.iter()
            .find(|key| key.kid == kid)
            .cloned()
            .ok_or_else(|| SigningKeyError::NotFound {
                kid: kid.to_owned(),
            })
    }

    async fn current_keys(&self) -> Result<Arc<[SigningKey]>, SigningKeyError> {
        {
            let cached = self.cached.read().await;
            if let Some(entry) = cached.as_ref().filter(|entry| self.is_fresh(entry)) {
                return Ok(Arc::clone(&entry.keys));
            }
        }

        let mut cached = self.cached.write().await;
        if let Some(entry) = cached.as_ref().filter(|entry| self.is_fresh(entry)) {
            return Ok(Arc::clone(&entry.keys));
        }

        let keys: Arc<[SigningKey]> = self.source.fetch_keys().await?.into();
        info!(key_count = keys.len(), "signing keys refreshed");
        *cached = Some(CachedKeys {
            keys: Arc::clone(&keys),
            fetched_at: self.clock.utc(),
        });
        Ok(keys)
    }
}
