//! Day boundaries for check-ins.
//!
//! "Today" is derived from an injected [`Clock`] and an explicit fixed UTC
//! offset, never from the process-local time zone.

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use mockable::Clock;

/// Largest accepted offset from UTC, in minutes.
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Calendar used to bucket check-ins by day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInCalendar {
    offset: FixedOffset,
}

impl Default for CheckInCalendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl CheckInCalendar {
    /// Calendar whose days start at midnight UTC.
    pub fn utc() -> Self {
        Self::from_offset_minutes(0)
    }

    /// Build a calendar from an offset in minutes east of UTC.
    ///
    /// Offsets beyond ±14 hours are clamped.
    ///
    /// # Examples
    /// ```
    /// use vibecheck::domain::CheckInCalendar;
    ///
    /// let calendar = CheckInCalendar::from_offset_minutes(24 * 60);
    /// assert_eq!(calendar.offset_minutes(), 14 * 60);
    /// ```
    pub fn from_offset_minutes(minutes: i32) -> Self {
        let clamped = minutes.clamp(-MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES);
        let offset = FixedOffset::east_opt(clamped * 60).unwrap_or_else(|| Utc.fix());
        Self { offset }
    }

    /// Offset east of UTC in minutes.
    pub fn offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// The current calendar day according to `clock`.
    pub fn today(&self, clock: &dyn Clock) -> NaiveDate {
        clock.utc().with_timezone(&self.offset).date_naive()
    }
}
