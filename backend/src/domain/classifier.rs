//! Weighted keyword classifier mapping free text onto an aesthetic.
//!
//! Each taxonomy category accumulates `weight` for every keyword that matches
//! a whole token (or consecutive tokens for phrases) and `weight / 2` for a
//! keyword that only occurs inside a larger word. The strictly highest score
//! wins; ties keep the earlier declared category.

use super::AestheticKey;
use super::taxonomy::{TAXONOMY, TaxonomyCategory};

const WHOLE_TOKEN_FACTOR: f64 = 1.0;
const SUBSTRING_FACTOR: f64 = 0.5;

/// Lowercase and trim mood text before matching.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whitespace tokens with surrounding ASCII punctuation removed.
pub(crate) fn tokens(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Winning category and its accumulated score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryMatch {
    /// The winning taxonomy entry.
    pub category: &'static TaxonomyCategory,
    /// Accumulated weighted score, always positive.
    pub score: f64,
}

/// Score `text` against every category and return the best one, if any
/// category scored above zero.
pub fn best_category(text: &str) -> Option<CategoryMatch> {
    let normalized = normalize(text);
    let tokens = tokens(&normalized);

    let mut best: Option<CategoryMatch> = None;
    for category in &TAXONOMY {
        let score = category_score(category, &normalized, &tokens);
        if score <= 0.0 {
            continue;
        }
        if best.is_none_or(|current| score > current.score) {
            best = Some(CategoryMatch { category, score });
        }
    }
    best
}

/// Map free text to its final aesthetic, defaulting to
/// [`AestheticKey::Peaceful`] when nothing matches.
///
/// # Examples
/// ```
/// use vibecheck::domain::{AestheticKey, classify_aesthetic};
///
/// assert_eq!(classify_aesthetic("so stressed and anxious"), AestheticKey::Melancholy);
/// assert_eq!(classify_aesthetic(""), AestheticKey::Peaceful);
/// ```
pub fn classify_aesthetic(text: &str) -> AestheticKey {
    best_category(text).map_or(AestheticKey::DEFAULT, |found| found.category.aesthetic)
}

fn category_score(category: &TaxonomyCategory, normalized: &str, tokens: &[&str]) -> f64 {
    category
        .keywords
        .iter()
        .filter(|keyword| normalized.contains(**keyword))
        .map(|keyword| {
            let factor = if is_whole_match(tokens, keyword) {
                WHOLE_TOKEN_FACTOR
            } else {
                SUBSTRING_FACTOR
            };
            factor * category.weight
        })
        .sum()
}

fn is_whole_match(tokens: &[&str], keyword: &str) -> bool {
    let parts: Vec<&str> = keyword.split_whitespace().collect();
    !parts.is_empty() && tokens.windows(parts.len()).any(|window| window == parts.as_slice())
}
