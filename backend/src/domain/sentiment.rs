//! Lexicon-based vibe scoring.
//!
//! The score starts at a neutral 55 and moves by a diminishing-returns amount
//! per lexicon tier, a small bonus for longer entries, and one nudge each for
//! positive and negative emoji. The result is clamped to the vibe score range.

use std::collections::HashSet;

use super::VibeScore;
use super::classifier::normalize;
use super::lexicon::{LexiconTier, NEGATIVE_EMOJI, POSITIVE_EMOJI, TIERS};

/// Score of an entry with no sentiment signal.
pub const NEUTRAL_SCORE: i32 = 55;

const LONG_TEXT_CHARS: usize = 100;
const LONG_TEXT_BONUS: i32 = 5;
const MEDIUM_TEXT_CHARS: usize = 50;
const MEDIUM_TEXT_BONUS: i32 = 3;
const EMOJI_NUDGE: i32 = 3;

/// Compute the vibe score for raw mood text.
///
/// # Examples
/// ```
/// use vibecheck::domain::sentiment_score;
///
/// assert_eq!(sentiment_score("").value(), 55);
/// assert!(sentiment_score("awful, miserable, hopeless").value() < 55);
/// ```
pub fn sentiment_score(text: &str) -> VibeScore {
    let normalized = normalize(text);
    let token_set: HashSet<&str> = normalized
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|token| !token.is_empty())
        .collect();

    let lexicon_delta: i32 = TIERS
        .iter()
        .map(|tier| tier_contribution(tier, matches_in_tier(tier, &normalized, &token_set)))
        .sum();

    let raw = NEUTRAL_SCORE + lexicon_delta + length_bonus(&normalized) + emoji_nudge(&normalized);
    VibeScore::clamped(i64::from(raw))
}

fn matches_in_tier(tier: &LexiconTier, normalized: &str, token_set: &HashSet<&str>) -> u32 {
    let count = tier
        .words
        .iter()
        .filter(|word| token_set.contains(**word) || normalized.contains(**word))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// `round(n * base * decay^(n-1))`, signed by the tier polarity.
fn tier_contribution(tier: &LexiconTier, matches: u32) -> i32 {
    if matches == 0 {
        return 0;
    }
    let exponent = i32::try_from(matches - 1).unwrap_or(i32::MAX);
    let magnitude = f64::from(matches) * tier.base * tier.decay.powi(exponent);
    tier.polarity * magnitude.round() as i32
}

fn length_bonus(normalized: &str) -> i32 {
    let length = normalized.chars().count();
    if length > LONG_TEXT_CHARS {
        LONG_TEXT_BONUS
    } else if length > MEDIUM_TEXT_CHARS {
        MEDIUM_TEXT_BONUS
    } else {
        0
    }
}

fn emoji_nudge(normalized: &str) -> i32 {
    let positive = POSITIVE_EMOJI.iter().any(|emoji| normalized.contains(emoji));
    let negative = NEGATIVE_EMOJI.iter().any(|emoji| normalized.contains(emoji));
    i32::from(positive) * EMOJI_NUDGE - i32::from(negative) * EMOJI_NUDGE
}
