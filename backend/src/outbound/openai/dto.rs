//! DTOs for the chat-completions wire format.
//!
//! Requests are built from borrowed text; responses decode into these DTOs
//! first and then into the domain `MoodAnalysis` in one pass.

use serde::{Deserialize, Serialize};

use crate::domain::ports::MoodAnalysis;

#[derive(Debug, Serialize)]
pub(super) struct ChatRequestDto<'a> {
    pub(super) model: &'a str,
    pub(super) messages: [ChatMessageDto<'a>; 2],
}

#[derive(Debug, Serialize)]
pub(super) struct ChatMessageDto<'a> {
    pub(super) role: &'static str,
    pub(super) content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatResponseDto {
    #[serde(default)]
    pub(super) choices: Vec<ChatChoiceDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatChoiceDto {
    pub(super) message: ChatChoiceMessageDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatChoiceMessageDto {
    #[serde(default)]
    pub(super) content: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct MoodAnalysisDto {
    pub(super) aesthetic_key: String,
    pub(super) vibe_score: i64,
    pub(super) insight: String,
}

impl From<MoodAnalysisDto> for MoodAnalysis {
    fn from(value: MoodAnalysisDto) -> Self {
        Self {
            aesthetic_key: value.aesthetic_key,
            vibe_score: value.vibe_score,
            insight: value.insight,
        }
    }
}

impl ChatResponseDto {
    /// Content of the first choice, if any.
    pub(super) fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
    }
}
