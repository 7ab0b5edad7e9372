//! Driving port for reading check-ins and statistics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{CheckIn, Error, UserId, VibeStats};

/// Default history page size.
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;
/// Largest history page size.
pub const MAX_HISTORY_LIMIT: u32 = 100;

/// Request for a page of check-in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRequest {
    /// Owner of the history.
    pub user_id: UserId,
    /// Page size; defaults to 20 and is clamped to [1, 100].
    pub limit: Option<u32>,
    /// Number of newest entries to skip.
    #[serde(default)]
    pub offset: u32,
}

impl HistoryRequest {
    /// Effective page size after defaulting and clamping.
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT)
    }
}

/// A page of check-in history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage {
    /// Check-ins in this page.
    pub items: Vec<CheckIn>,
    /// Total check-ins for the user.
    pub total: u64,
    /// Page size used.
    pub limit: u32,
    /// Offset used.
    pub offset: u32,
}

/// Driving port for check-in reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInQuery: Send + Sync {
    /// The user's check-in for the current calendar day, if any.
    async fn today(&self, user_id: &UserId) -> Result<Option<CheckIn>, Error>;

    /// A page of the user's history.
    async fn history(&self, request: HistoryRequest) -> Result<HistoryPage, Error>;

    /// Streak counters and score summary.
    async fn stats(&self, user_id: &UserId) -> Result<VibeStats, Error>;
}
