//! Mood classification and check-in streak core.
//!
//! `domain` holds the classification pipeline, admission and streak rules
//! and the services that drive them; `outbound` holds the adapters that
//! implement its ports; `settings` loads runtime configuration.

pub mod domain;
pub mod outbound;
pub mod settings;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use settings::{SettingsError, VibeSettings};
