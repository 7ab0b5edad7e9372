//! Domain primitives, classification engine and check-in services.
//!
//! Purpose: turn free-text mood entries into a structured emotional profile
//! and track per-user check-in streaks. Everything here is transport
//! agnostic; adapters live in `outbound` and talk to the domain through
//! `ports`.
//!
//! Public surface:
//! - Error, ErrorCode - stable error payload returned by driving ports.
//! - AestheticKey, AestheticPreset - the ten final aesthetics.
//! - classify_aesthetic, sentiment_score, insight_for, classify_fallback:
//!   the deterministic classification pipeline.
//! - MoodClassifier - dispatcher that prefers external analysis.
//! - CheckInService - admission, streak tracking and history queries.
//! - SigningKeyCache - time-bounded identity-provider key cache.

pub mod admission;
pub mod aesthetic;
pub mod calendar;
pub mod check_in;
pub mod check_in_service;
pub mod classification;
pub mod classifier;
pub mod error;
pub mod insight;
pub mod lexicon;
pub mod mood_classifier;
pub mod ports;
pub mod sentiment;
pub mod signing_keys;
pub mod stats;
pub mod streak;
pub mod subject;
pub mod subject_locks;
pub mod taxonomy;

pub use self::admission::{AdmissionDecision, AdmissionPolicy, DEFAULT_GUEST_DAILY_LIMIT};
pub use self::aesthetic::{AestheticKey, AestheticPreset, UnknownAestheticKey};
pub use self::calendar::CheckInCalendar;
pub use self::check_in::{CheckIn, MOOD_TEXT_MAX, MoodText, MoodTextValidationError};
pub use self::check_in_service::CheckInService;
pub use self::classification::{ClassificationResult, ClassificationSource, Insight, VibeScore};
pub use self::classifier::{CategoryMatch, best_category, classify_aesthetic};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::insight::insight_for;
pub use self::mood_classifier::{DEFAULT_ANALYSIS_TIMEOUT, MoodClassifier, classify_fallback};
pub use self::sentiment::{NEUTRAL_SCORE, sentiment_score};
pub use self::signing_keys::{DEFAULT_SIGNING_KEY_TTL, SigningKeyCache, SigningKeyError};
pub use self::stats::VibeStats;
pub use self::streak::{StreakState, StreakUpdate};
pub use self::subject::{CheckInSubject, DEVICE_ID_MAX, DeviceId, SubjectValidationError, UserId};
pub use self::subject_locks::{SubjectGuard, SubjectLocks};
