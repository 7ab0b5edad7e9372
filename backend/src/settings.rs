//! Runtime configuration loaded via OrthoConfig.
//!
//! The day offset defaults to UTC. Every other field is optional;
//! accessors apply defaults and clamp numeric values into their supported
//! ranges so callers never see out-of-range settings. Values come from
//! `VIBECHECK_*` environment variables and configuration files; the binary
//! owns its command line, so no CLI layer is merged here.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{AdmissionPolicy, CheckInCalendar, DEFAULT_GUEST_DAILY_LIMIT};
use crate::outbound::openai::DEFAULT_OPENAI_MODEL;

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_SIGNING_KEYS_URL: &str = "https://appleid.apple.com/auth/keys";

const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;
const AI_TIMEOUT_SECS_RANGE: (u64, u64) = (1, 120);
const DEFAULT_SIGNING_KEYS_TTL_HOURS: u64 = 24;
const SIGNING_KEYS_TTL_HOURS_RANGE: (u64, u64) = (1, 168);
const DEFAULT_SIGNING_KEYS_TIMEOUT_SECS: u64 = 10;
const SIGNING_KEYS_TIMEOUT_SECS_RANGE: (u64, u64) = (1, 60);

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A configured URL could not be parsed.
    #[error("{field} is not a valid URL: {message}")]
    InvalidUrl {
        /// Setting that held the URL.
        field: &'static str,
        /// Parser message.
        message: String,
    },
}

/// Configuration for the vibe check core.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VIBECHECK")]
pub struct VibeSettings {
    /// API key for the chat-completions service. Unset disables AI analysis.
    pub openai_api_key: Option<String>,
    /// Chat-completions endpoint override.
    pub openai_endpoint: Option<String>,
    /// Chat-completions model override.
    pub openai_model: Option<String>,
    /// Upper bound on one AI analysis call, in seconds.
    pub ai_timeout_secs: Option<u64>,
    /// Fixed UTC offset, in minutes, that defines "today".
    #[ortho_config(default = 0)]
    pub day_offset_minutes: i32,
    /// Guest check-ins allowed per device per day.
    pub guest_daily_limit: Option<u32>,
    /// JSON Web Key Set location.
    pub signing_keys_url: Option<String>,
    /// Signing key cache lifetime, in hours.
    pub signing_keys_ttl_hours: Option<u64>,
    /// Upper bound on one signing key fetch, in seconds.
    pub signing_keys_timeout_secs: Option<u64>,
}

fn parse_url(field: &'static str, raw: Option<&str>, default: &str) -> Result<Url, SettingsError> {
    Url::parse(raw.unwrap_or(default)).map_err(|error| SettingsError::InvalidUrl {
        field,
        message: error.to_string(),
    })
}

impl VibeSettings {
    /// Return the API key when it is set and not blank.
    pub fn openai_api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Return the chat-completions endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the override does not parse.
    pub fn openai_endpoint(&self) -> Result<Url, SettingsError> {
        parse_url(
            "openai_endpoint",
            self.openai_endpoint.as_deref(),
            DEFAULT_OPENAI_ENDPOINT,
        )
    }

    /// Return the chat-completions model.
    pub fn openai_model(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    /// Return the AI call timeout, clamped to 1..=120 seconds.
    pub fn ai_timeout(&self) -> Duration {
        let (min, max) = AI_TIMEOUT_SECS_RANGE;
        let secs = self
            .ai_timeout_secs
            .unwrap_or(DEFAULT_AI_TIMEOUT_SECS)
            .clamp(min, max);
        Duration::from_secs(secs)
    }

    /// Return the calendar for the configured day offset.
    pub fn calendar(&self) -> CheckInCalendar {
        CheckInCalendar::from_offset_minutes(self.day_offset_minutes)
    }

    /// Return the admission policy for the configured guest allowance.
    pub fn admission_policy(&self) -> AdmissionPolicy {
        AdmissionPolicy::new(self.guest_daily_limit.unwrap_or(DEFAULT_GUEST_DAILY_LIMIT))
    }

    /// Return the JSON Web Key Set location.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the override does not parse.
    pub fn signing_keys_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "signing_keys_url",
            self.signing_keys_url.as_deref(),
            DEFAULT_SIGNING_KEYS_URL,
        )
    }

    /// Return the signing key cache lifetime, clamped to 1..=168 hours.
    pub fn signing_keys_ttl(&self) -> Duration {
        let (min, max) = SIGNING_KEYS_TTL_HOURS_RANGE;
        let hours = self
            .signing_keys_ttl_hours
            .unwrap_or(DEFAULT_SIGNING_KEYS_TTL_HOURS)
            .clamp(min, max);
        Duration::from_secs(hours * 60 * 60)
    }

    /// Return the signing key fetch timeout, clamped to 1..=60 seconds.
    pub fn signing_keys_timeout(&self) -> Duration {
        let (min, max) = SIGNING_KEYS_TIMEOUT_SECS_RANGE;
        let secs = self
            .signing_keys_timeout_secs
            .unwrap_or(DEFAULT_SIGNING_KEYS_TIMEOUT_SECS)
            .clamp(min, max);
        Duration::from_secs(secs)
    }
}
