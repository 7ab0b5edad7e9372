//! Check-in records and the mood text they carry.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AestheticKey, CheckInSubject, ClassificationResult, Insight, VibeScore};

/// Maximum mood text length in characters.
pub const MOOD_TEXT_MAX: usize = 500;

/// Validation errors for [`MoodText`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoodTextValidationError {
    /// Text was empty or whitespace only.
    #[error("mood text is required")]
    Empty,
    /// Text exceeded [`MOOD_TEXT_MAX`] characters.
    #[error("mood text must be at most {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

/// Free-text mood entry accepted for a check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MoodText(String);

impl MoodText {
    /// Validate mood text. The original text is stored untrimmed.
    pub fn new(raw: impl Into<String>) -> Result<Self, MoodTextValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(MoodTextValidationError::Empty);
        }
        if raw.chars().count() > MOOD_TEXT_MAX {
            return Err(MoodTextValidationError::TooLong { max: MOOD_TEXT_MAX });
        }
        Ok(Self(raw))
    }

    /// Borrow the text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MoodText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MoodText> for String {
    fn from(value: MoodText) -> Self {
        value.0
    }
}

impl TryFrom<String> for MoodText {
    type Error = MoodTextValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One accepted check-in, ready for persistence.
///
/// Presentation fields are copied from the aesthetic preset when the record
/// is created so stored rows never depend on later preset changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    /// Record identifier.
    pub id: Uuid,
    /// User or guest device.
    pub subject: CheckInSubject,
    /// Calendar day in the configured time zone.
    pub check_date: NaiveDate,
    /// Original mood text.
    pub mood_text: MoodText,
    /// Final aesthetic key.
    pub aesthetic: AestheticKey,
    /// Display name of the aesthetic.
    pub aesthetic_name: String,
    /// Emoji badge.
    pub emoji: String,
    /// Primary colour.
    pub color_primary: String,
    /// Secondary colour.
    pub color_secondary: String,
    /// Accent colour.
    pub color_accent: String,
    /// Clamped vibe score.
    pub vibe_score: VibeScore,
    /// Generated insight.
    pub insight: Insight,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

impl CheckIn {
    /// Build a record from a classification result.
    pub fn new(
        subject: CheckInSubject,
        check_date: NaiveDate,
        mood_text: MoodText,
        classification: ClassificationResult,
        created_at: DateTime<Utc>,
    ) -> Self {
        let preset = classification.aesthetic.preset();
        Self {
            id: Uuid::new_v4(),
            subject,
            check_date,
            mood_text,
            aesthetic: classification.aesthetic,
            aesthetic_name: preset.name.to_owned(),
            emoji: preset.emoji.to_owned(),
            color_primary: preset.color_primary.to_owned(),
            color_secondary: preset.color_secondary.to_owned(),
            color_accent: preset.color_accent.to_owned(),
            vibe_score: classification.vibe_score,
            insight: classification.insight,
            created_at,
        }
    }
}
