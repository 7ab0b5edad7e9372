//! Driven port for the optional external mood analysis service.
//!
//! The domain owns the response contract. Adapters return the raw fields
//! exactly as the service produced them; validation, clamping and fallback
//! happen in the classification dispatcher.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::define_port_error;

/// Raw analysis returned by the external service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    /// Aesthetic key as reported; may be unknown.
    pub aesthetic_key: String,
    /// Score as reported; may be out of range.
    pub vibe_score: i64,
    /// Insight as reported; may be over-long.
    pub insight: String,
}

define_port_error! {
    /// Errors surfaced while calling the mood analysis service.
    pub enum MoodAnalysisSourceError {
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "mood analysis transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "mood analysis timed out: {message}",
        /// The service answered with a non-success status.
        Status { status: u16, message: String } =>
            "mood analysis returned status {status}: {message}",
        /// The response body did not match the expected shape.
        Decode { message: String } =>
            "mood analysis response decode failed: {message}",
        /// The response carried no completion to read.
        EmptyResponse =>
            "mood analysis response contained no choices",
    }
}

/// Port for analysing free-text mood entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoodAnalysisSource: Send + Sync {
    /// Analyse one mood entry. Single attempt; callers apply their own
    /// timeout.
    async fn analyse(&self, mood_text: &str) -> Result<MoodAnalysis, MoodAnalysisSourceError>;
}
