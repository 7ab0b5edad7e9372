//! Consecutive-day streak tracking for registered users.

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Per-user streak counters.
///
/// `current_streak <= longest_streak` holds after every transition and
/// `total_check_ins` never decreases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    /// Owner of the streak.
    pub user_id: UserId,
    /// Consecutive days up to and including `last_check_date`.
    pub current_streak: u32,
    /// Longest run ever observed.
    pub longest_streak: u32,
    /// Number of counted check-ins.
    pub total_check_ins: u32,
    /// Day of the last counted check-in.
    pub last_check_date: NaiveDate,
    /// Optimistic concurrency revision, starting at 1 on first save.
    pub revision: u32,
}

/// Transition applied to a streak for one accepted check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreakUpdate {
    /// First counted check-in for the user.
    Started(StreakState),
    /// Check-in on the day after the last one.
    Extended(StreakState),
    /// One or more days were skipped.
    Reset(StreakState),
    /// The day was already counted; state is unchanged.
    AlreadyCounted(StreakState),
}

impl StreakUpdate {
    /// Borrow the resulting state.
    pub fn state(&self) -> &StreakState {
        match self {
            Self::Started(state)
            | Self::Extended(state)
            | Self::Reset(state)
            | Self::AlreadyCounted(state) => state,
        }
    }

    /// Consume the update, returning the resulting state.
    pub fn into_state(self) -> StreakState {
        match self {
            Self::Started(state)
            | Self::Extended(state)
            | Self::Reset(state)
            | Self::AlreadyCounted(state) => state,
        }
    }

    /// Whether the state must be persisted.
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::AlreadyCounted(_))
    }

    /// Short label used in logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Started(_) => "started",
            Self::Extended(_) => "extended",
            Self::Reset(_) => "reset",
            Self::AlreadyCounted(_) => "already_counted",
        }
    }
}

impl StreakState {
    /// Initial state for a user's first counted check-in.
    pub fn first(user_id: UserId, today: NaiveDate) -> Self {
        Self {
            user_id,
            current_streak: 1,
            longest_streak: 1,
            total_check_ins: 1,
            last_check_date: today,
            revision: 1,
        }
    }

    /// Apply a check-in on `today` to an optional existing state.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use vibecheck::domain::{StreakState, UserId};
    ///
    /// let day = NaiveDate::from_ymd_opt(2026, 5, 1).expect("date");
    /// let started = StreakState::advance(None, UserId::random(), day).into_state();
    /// assert_eq!(started.current_streak, 1);
    /// ```
    pub fn advance(existing: Option<&Self>, user_id: UserId, today: NaiveDate) -> StreakUpdate {
        let Some(previous) = existing else {
            return StreakUpdate::Started(Self::first(user_id, today));
        };

        if previous.last_check_date == today {
            return StreakUpdate::AlreadyCounted(previous.clone());
        }

        let extends = today
            .checked_sub_signed(TimeDelta::days(1))
            .is_some_and(|yesterday| yesterday == previous.last_check_date);
        let current_streak = if extends {
            previous.current_streak.saturating_add(1)
        } else {
            1
        };

        let next = Self {
            user_id: previous.user_id.clone(),
            current_streak,
            longest_streak: previous.longest_streak.max(current_streak),
            total_check_ins: previous.total_check_ins.saturating_add(1),
            last_check_date: today,
            revision: previous.revision.saturating_add(1),
        };

        if extends {
            StreakUpdate::Extended(next)
        } else {
            StreakUpdate::Reset(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 30)
            .and_then(|base| base.checked_add_signed(TimeDelta::days(offset)))
            .expect("valid date")
    }

    #[fixture]
    fn user_id() -> UserId {
        UserId::random()
    }

    #[rstest]
    fn first_check_in_starts_at_one(user_id: UserId) {
        let update = StreakState::advance(None, user_id, day(0));
        assert!(matches!(update, StreakUpdate::Started(_)));
        let state = update.state();
        assert_eq!(
            (state.current_streak, state.longest_streak, state.total_check_ins),
            (1, 1, 1)
        );
        assert_eq!(state.last_check_date, day(0));
    }

    #[rstest]
    fn consecutive_then_skipped_days(user_id: UserId) {
        let d0 = StreakState::advance(None, user_id.clone(), day(0)).into_state();
        let d1 = StreakState::advance(Some(&d0), user_id.clone(), day(1));
        assert!(matches!(d1, StreakUpdate::Extended(_)));
        let d1 = d1.into_state();
        assert_eq!(
            (d1.current_streak, d1.longest_streak, d1.total_check_ins),
            (2, 2, 2)
        );

        let d3 = StreakState::advance(Some(&d1), user_id, day(3));
        assert!(matches!(d3, StreakUpdate::Reset(_)));
        let d3 = d3.into_state();
        assert_eq!(
            (d3.current_streak, d3.longest_streak, d3.total_check_ins),
            (1, 2, 3)
        );
        assert_eq!(d3.last_check_date, day(3));
    }

    #[rstest]
    fn same_day_is_a_no_op(user_id: UserId) {
        let first = StreakState::advance(None, user_id.clone(), day(0)).into_state();
        let again = StreakState::advance(Some(&first), user_id, day(0));
        assert!(!again.is_change());
        assert_eq!(again.state(), &first);
    }

    #[rstest]
    fn month_boundaries_extend(user_id: UserId) {
        // 2026-01-31 -> 2026-02-01
        let jan = StreakState::first(user_id.clone(), day(1));
        let feb = StreakState::advance(Some(&jan), user_id, day(2));
        assert!(matches!(feb, StreakUpdate::Extended(_)));
    }

    #[rstest]
    fn earlier_day_resets(user_id: UserId) {
        let later = StreakState::first(user_id.clone(), day(5));
        let earlier = StreakState::advance(Some(&later), user_id, day(4)).into_state();
        assert_eq!(earlier.current_streak, 1);
        assert!(earlier.current_streak <= earlier.longest_streak);
    }

    #[rstest]
    fn revisions_increase_on_change(user_id: UserId) {
        let first = StreakState::first(user_id.clone(), day(0));
        let next = StreakState::advance(Some(&first), user_id, day(1)).into_state();
        assert_eq!(next.revision, first.revision + 1);
    }
}
