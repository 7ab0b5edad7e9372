//! Per-user check-in statistics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{CheckIn, StreakState};

/// Summary of a user's check-in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeStats {
    /// Current consecutive-day streak.
    pub current_streak: u32,
    /// Longest streak ever reached.
    pub longest_streak: u32,
    /// Counted check-ins.
    pub total_check_ins: u32,
    /// Mean vibe score over all check-ins, `0.0` when there are none.
    pub avg_vibe_score: f64,
    /// Most frequent aesthetic display name.
    pub top_aesthetic: Option<String>,
}

impl VibeStats {
    /// Summarise a streak and a newest-first list of check-ins.
    ///
    /// Ties for the top aesthetic go to the name seen first in
    /// `newest_first`.
    pub fn summarise(streak: Option<&StreakState>, newest_first: &[CheckIn]) -> Self {
        let (current_streak, longest_streak, total_check_ins) = streak.map_or((0, 0, 0), |s| {
            (s.current_streak, s.longest_streak, s.total_check_ins)
        });

        Self {
            current_streak,
            longest_streak,
            total_check_ins,
            avg_vibe_score: average_score(newest_first),
            top_aesthetic: top_aesthetic(newest_first),
        }
    }
}

fn average_score(check_ins: &[CheckIn]) -> f64 {
    if check_ins.is_empty() {
        return 0.0;
    }
    let sum: i64 = check_ins
        .iter()
        .map(|check_in| i64::from(check_in.vibe_score.value()))
        .sum();
    sum as f64 / check_ins.len() as f64
}

fn top_aesthetic(newest_first: &[CheckIn]) -> Option<String> {
    // name -> (count, first position)
    let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, check_in) in newest_first.iter().enumerate() {
        tally
            .entry(check_in.aesthetic_name.as_str())
            .or_insert((0, position))
            .0 += 1;
    }

    tally
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(name, _)| name.to_owned())
}
