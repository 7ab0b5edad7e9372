//! Sentiment lexicon: four weighted word tiers plus emoji cues.

/// One tier of sentiment words with its diminishing-returns parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconTier {
    /// Words in this tier, lowercase.
    pub words: &'static [&'static str],
    /// Contribution of the first match.
    pub base: f64,
    /// Multiplicative decay applied per additional match.
    pub decay: f64,
    /// `1` for positive tiers, `-1` for negative ones.
    pub polarity: i32,
}

/// Strongly positive words.
pub const STRONG_POSITIVE: LexiconTier = LexiconTier {
    words: &[
        "amazing", "awesome", "fantastic", "incredible", "wonderful", "grateful", "happy", "love",
        "thrilled", "ecstatic", "blessed", "excited", "joy",
    ],
    base: 15.0,
    decay: 0.8,
    polarity: 1,
};

/// Mildly positive words.
pub const MILD_POSITIVE: LexiconTier = LexiconTier {
    words: &[
        "good", "nice", "fine", "okay", "calm", "content", "hopeful", "relaxed", "glad",
        "pleasant", "cool", "chill",
    ],
    base: 8.0,
    decay: 0.9,
    polarity: 1,
};

/// Strongly negative words.
pub const STRONG_NEGATIVE: LexiconTier = LexiconTier {
    words: &[
        "sad", "depressed", "miserable", "awful", "terrible", "hopeless", "lonely", "heartbroken",
        "anxious", "exhausted", "hate", "devastated",
    ],
    base: 15.0,
    decay: 0.8,
    polarity: -1,
};

/// Mildly negative words.
pub const MILD_NEGATIVE: LexiconTier = LexiconTier {
    words: &[
        "tired", "bored", "meh", "stressed", "worried", "annoyed", "down", "frustrated", "bad",
        "upset", "nervous",
    ],
    base: 8.0,
    decay: 0.9,
    polarity: -1,
};

/// All tiers, in scoring order.
pub const TIERS: [LexiconTier; 4] = [STRONG_POSITIVE, MILD_POSITIVE, STRONG_NEGATIVE, MILD_NEGATIVE];

/// Emoji that nudge the score up.
pub const POSITIVE_EMOJI: &[&str] = &[
    "😊", "😁", "😄", "🥰", "😍", "❤️", "🎉", "✨", "🔥", "💪", "🙌", "😎",
];

/// Emoji that nudge the score down.
pub const NEGATIVE_EMOJI: &[&str] = &["😢", "😭", "😞", "😔", "😩", "😤", "😡", "💔", "😰", "😫"];
