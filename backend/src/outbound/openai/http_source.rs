//! Reqwest-backed mood analysis adapter for chat-completions endpoints.
//!
//! This adapter owns transport details only: request serialisation, HTTP
//! error mapping, code-fence stripping and JSON decoding. Validation of the
//! decoded fields is left to the domain dispatcher.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{ChatMessageDto, ChatRequestDto, ChatResponseDto, MoodAnalysisDto};
use crate::domain::ports::{MoodAnalysis, MoodAnalysisSource, MoodAnalysisSourceError};

/// Default chat-completions model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are a mood-to-aesthetic analyzer. Given a user mood text, \
respond with JSON only (no markdown, no code fences): {\"aesthetic_key\": one of \
[\"chill\",\"energetic\",\"romantic\",\"melancholy\",\"adventurous\",\"creative\",\
\"peaceful\",\"confident\",\"cozy\",\"mysterious\"], \"vibe_score\": 10-100, \
\"insight\": \"short 1-sentence insight about their vibe\"}. Match the aesthetic that \
best fits the emotional tone.";

const CODE_FENCE: &str = "```";

/// Mood analysis source that POSTs to one chat-completions endpoint.
pub struct OpenAiMoodSource {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for OpenAiMoodSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiMoodSource")
            .field("endpoint", &self.endpoint.as_str())
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiMoodSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl MoodAnalysisSource for OpenAiMoodSource {
    async fn analyse(&self, mood_text: &str) -> Result<MoodAnalysis, MoodAnalysisSourceError> {
        let request = ChatRequestDto {
            model: self.model.as_str(),
            messages: [
                ChatMessageDto {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessageDto {
                    role: "user",
                    content: mood_text,
                },
            ],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status != StatusCode::OK {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_analysis(body.as_ref())
    }
}

fn parse_analysis(body: &[u8]) -> Result<MoodAnalysis, MoodAnalysisSourceError> {
    let decoded: ChatResponseDto = serde_json::from_slice(body).map_err(|error| {
        MoodAnalysisSourceError::decode(format!("invalid chat completion payload: {error}"))
    })?;
    let content = decoded
        .into_first_content()
        .ok_or_else(MoodAnalysisSourceError::empty_response)?;

    let analysis: MoodAnalysisDto =
        serde_json::from_str(strip_code_fence(&content)).map_err(|error| {
            MoodAnalysisSourceError::decode(format!("invalid analysis JSON: {error}"))
        })?;
    Ok(analysis.into())
}

/// Trim the content and, when it opens with a code fence and spans more
/// than two lines, drop its first and last lines.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    if !trimmed.starts_with(CODE_FENCE) {
        return trimmed;
    }
    let lines: Vec<&str> = trimmed.split('\n').collect();
    if lines.len() <= 2 {
        return trimmed;
    }

    let start = lines[0].len() + 1;
    let end = trimmed.len() - lines[lines.len() - 1].len() - 1;
    trimmed.get(start..end).unwrap_or(trimmed)
}

fn map_transport_error(error: reqwest::Error) -> MoodAnalysisSourceError {
    if error.is_timeout() {
        MoodAnalysisSourceError::timeout(error.to_string())
    } else {
        MoodAnalysisSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> MoodAnalysisSourceError {
    MoodAnalysisSourceError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
