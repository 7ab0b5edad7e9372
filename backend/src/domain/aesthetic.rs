//! Aesthetic presets: the ten canonical mood categories.
//!
//! Every classification path ends on an [`AestheticKey`]. Unknown keys coming
//! from outside the domain (AI output, stored strings) are resolved through
//! [`AestheticKey::parse_or_default`] so presentation always has an entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the ten canonical aesthetic identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AestheticKey {
    /// Relaxed, unhurried.
    Chill,
    /// High energy and excitement.
    Energetic,
    /// Affection and longing.
    Romantic,
    /// Sadness, fatigue, worry.
    Melancholy,
    /// Wanderlust and spontaneity.
    Adventurous,
    /// Inspiration and making things.
    Creative,
    /// Calm contentment. The fallback key.
    Peaceful,
    /// Self-assurance.
    Confident,
    /// Comfort and warmth.
    Cozy,
    /// Introspection and the night.
    Mysterious,
}

/// Display presentation attached to an aesthetic key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AestheticPreset {
    /// Human readable name shown to users.
    pub name: &'static str,
    /// Emoji badge.
    pub emoji: &'static str,
    /// Primary hex colour.
    pub color_primary: &'static str,
    /// Secondary hex colour.
    pub color_secondary: &'static str,
    /// Accent hex colour.
    pub color_accent: &'static str,
}

/// Returned by [`AestheticKey::from_str`] for identifiers outside the set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown aesthetic key: {0}")]
pub struct UnknownAestheticKey(pub String);

impl AestheticKey {
    /// All keys in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Chill,
        Self::Energetic,
        Self::Romantic,
        Self::Melancholy,
        Self::Adventurous,
        Self::Creative,
        Self::Peaceful,
        Self::Confident,
        Self::Cozy,
        Self::Mysterious,
    ];

    /// Key used whenever nothing better is known.
    pub const DEFAULT: Self = Self::Peaceful;

    /// Canonical short identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chill => "chill",
            Self::Energetic => "energetic",
            Self::Romantic => "romantic",
            Self::Melancholy => "melancholy",
            Self::Adventurous => "adventurous",
            Self::Creative => "creative",
            Self::Peaceful => "peaceful",
            Self::Confident => "confident",
            Self::Cozy => "cozy",
            Self::Mysterious => "mysterious",
        }
    }

    /// Presentation for this key.
    pub const fn preset(self) -> AestheticPreset {
        match self {
            Self::Chill => preset("Chill Vibes", "😌", "#6366f1", "#a5b4fc", "#e0e7ff"),
            Self::Energetic => preset("High Energy", "⚡", "#f97316", "#fdba74", "#fff7ed"),
            Self::Romantic => preset("Hopeless Romantic", "💕", "#ec4899", "#f9a8d4", "#fdf2f8"),
            Self::Melancholy => preset("Melancholy Soul", "🌧️", "#64748b", "#94a3b8", "#f1f5f9"),
            Self::Adventurous => preset("Adventure Mode", "🏔️", "#22c55e", "#86efac", "#f0fdf4"),
            Self::Creative => preset("Creative Flow", "🎨", "#8b5cf6", "#c4b5fd", "#f5f3ff"),
            Self::Peaceful => preset("Inner Peace", "🧘", "#06b6d4", "#67e8f9", "#ecfeff"),
            Self::Confident => preset("Main Character", "👑", "#eab308", "#fde047", "#fefce8"),
            Self::Cozy => preset("Cozy Era", "☕", "#92400e", "#fbbf24", "#fffbeb"),
            Self::Mysterious => preset("Dark Academia", "🌙", "#1e1b4b", "#4338ca", "#312e81"),
        }
    }

    /// Resolve an external identifier, correcting unknown values to
    /// [`AestheticKey::DEFAULT`].
    ///
    /// # Examples
    /// ```
    /// use vibecheck::domain::AestheticKey;
    ///
    /// assert_eq!(AestheticKey::parse_or_default("cozy"), AestheticKey::Cozy);
    /// assert_eq!(AestheticKey::parse_or_default("vaporwave"), AestheticKey::Peaceful);
    /// ```
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::DEFAULT)
    }
}

const fn preset(
    name: &'static str,
    emoji: &'static str,
    color_primary: &'static str,
    color_secondary: &'static str,
    color_accent: &'static str,
) -> AestheticPreset {
    AestheticPreset {
        name,
        emoji,
        color_primary,
        color_secondary,
        color_accent,
    }
}

impl FromStr for AestheticKey {
    type Err = UnknownAestheticKey;

    /// Exact, case-sensitive match against the canonical identifiers.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == raw)
            .ok_or_else(|| UnknownAestheticKey(raw.to_owned()))
    }
}

impl fmt::Display for AestheticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
