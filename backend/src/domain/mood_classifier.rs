//! Classification dispatcher.
//!
//! Tries the optional external analysis once under a timeout and falls back
//! to the deterministic keyword pipeline on any failure. Classification
//! never fails the caller.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::ports::{MoodAnalysis, MoodAnalysisSource};
use super::{
    AestheticKey, ClassificationResult, ClassificationSource, Insight, VibeScore,
    classify_aesthetic, insight_for, sentiment_score,
};

/// Default bound on one external analysis call.
pub const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(30);

/// Produces one [`ClassificationResult`] per mood entry.
#[derive(Clone)]
pub struct MoodClassifier {
    source: Option<Arc<dyn MoodAnalysisSource>>,
    timeout: Duration,
}

impl Default for MoodClassifier {
    fn default() -> Self {
        Self::fallback_only()
    }
}

impl std::fmt::Debug for MoodClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoodClassifier")
            .field("analysis_enabled", &self.source.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MoodClassifier {
    /// Classifier that never calls out.
    pub fn fallback_only() -> Self {
        Self {
            source: None,
            timeout: DEFAULT_ANALYSIS_TIMEOUT,
        }
    }

    /// Classifier that consults `source` first.
    pub fn with_source(source: Arc<dyn MoodAnalysisSource>, timeout: Duration) -> Self {
        Self {
            source: Some(source),
            timeout,
        }
    }

    /// Whether an external analysis source is configured.
    pub fn analysis_enabled(&self) -> bool {
        self.source.is_some()
    }

    /// Classify one mood entry.
    pub async fn classify(&self, mood_text: &str) -> ClassificationResult {
        let Some(source) = self.source.as_ref() else {
            debug!("mood analysis disabled, using fallback classifier");
            return classify_fallback(mood_text);
        };

        match tokio::time::timeout(self.timeout, source.analyse(mood_text)).await {
            Ok(Ok(analysis)) => {
                accept_analysis(analysis).unwrap_or_else(|| classify_fallback(mood_text))
            }
            Ok(Err(error)) => {
                warn!(error = %error, "mood analysis failed, using fallback classifier");
                classify_fallback(mood_text)
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.timeout.as_millis(),
                    "mood analysis timed out, using fallback classifier"
                );
                classify_fallback(mood_text)
            }
        }
    }
}

fn accept_analysis(analysis: MoodAnalysis) -> Option<ClassificationResult> {
    let aesthetic = match analysis.aesthetic_key.parse::<AestheticKey>() {
        Ok(aesthetic) => aesthetic,
        Err(error) => {
            warn!(error = %error, "mood analysis returned an unknown aesthetic");
            return None;
        }
    };

    Some(ClassificationResult {
        aesthetic,
        vibe_score: VibeScore::clamped(analysis.vibe_score),
        insight: Insight::truncated(analysis.insight),
        source: ClassificationSource::Ai,
    })
}

/// Deterministic classification: keyword taxonomy, lexicon score and
/// template insight.
///
/// # Examples
/// ```
/// use vibecheck::domain::{AestheticKey, classify_fallback};
///
/// let result = classify_fallback("cozy night in with tea and a blanket");
/// assert_eq!(result.aesthetic, AestheticKey::Cozy);
/// ```
pub fn classify_fallback(mood_text: &str) -> ClassificationResult {
    let aesthetic = classify_aesthetic(mood_text);
    let vibe_score = sentiment_score(mood_text);
    let insight = insight_for(aesthetic, vibe_score, mood_text);
    ClassificationResult {
        aesthetic,
        vibe_score,
        insight: Insight::truncated(insight),
        source: ClassificationSource::Fallback,
    }
}
