//! Classification result value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AestheticKey;

/// Integer vibe score in the closed range [10, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VibeScore(i32);

impl VibeScore {
    /// Lowest representable score.
    pub const MIN: i32 = 10;
    /// Highest representable score.
    pub const MAX: i32 = 100;

    /// Clamp any integer into range.
    ///
    /// # Examples
    /// ```
    /// use vibecheck::domain::VibeScore;
    ///
    /// assert_eq!(VibeScore::clamped(150).value(), 100);
    /// assert_eq!(VibeScore::clamped(-5).value(), 10);
    /// ```
    pub fn clamped(raw: i64) -> Self {
        let bounded = raw.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(i32::try_from(bounded).unwrap_or(Self::MIN))
    }

    /// The score as a plain integer.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for VibeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short generated sentence, at most 500 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Insight(String);

impl Insight {
    /// Maximum length in characters.
    pub const MAX_CHARS: usize = 500;
    const TRUNCATED_CHARS: usize = 497;
    const ELLIPSIS: &'static str = "...";

    /// Accept text, truncating over-long input to 497 characters followed
    /// by an ellipsis.
    pub fn truncated(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.chars().count() <= Self::MAX_CHARS {
            return Self(raw);
        }
        let mut shortened: String = raw.chars().take(Self::TRUNCATED_CHARS).collect();
        shortened.push_str(Self::ELLIPSIS);
        Self(shortened)
    }

    /// Borrow the text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which path produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    /// The external analysis service answered with a valid payload.
    Ai,
    /// The deterministic keyword pipeline.
    Fallback,
}

/// Structured emotional profile for one mood entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Final aesthetic key.
    pub aesthetic: AestheticKey,
    /// Clamped vibe score.
    pub vibe_score: VibeScore,
    /// Generated insight.
    pub insight: Insight,
    /// Path that produced the result.
    pub source: ClassificationSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(i64::MIN, 10)]
    #[case(-5, 10)]
    #[case(9, 10)]
    #[case(10, 10)]
    #[case(73, 73)]
    #[case(100, 100)]
    #[case(150, 100)]
    #[case(i64::MAX, 100)]
    fn vibe_scores_clamp(#[case] raw: i64, #[case] expected: i32) {
        assert_eq!(VibeScore::clamped(raw).value(), expected);
    }

    #[rstest]
    fn short_insights_are_kept_verbatim() {
        let text = "x".repeat(500);
        assert_eq!(Insight::truncated(text.clone()).as_str(), text);
    }

    #[rstest]
    fn long_insights_are_cut_with_ellipsis() {
        let insight = Insight::truncated("y".repeat(501));
        assert_eq!(insight.as_str().chars().count(), 500);
        assert!(insight.as_str().ends_with("yyy..."));
    }

    #[rstest]
    fn truncation_respects_multibyte_characters() {
        let insight = Insight::truncated("é".repeat(600));
        assert_eq!(insight.as_str().chars().count(), 500);
        assert!(insight.as_str().starts_with('é'));
    }
}
