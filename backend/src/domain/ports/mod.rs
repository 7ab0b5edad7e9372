//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod check_in_command;
mod check_in_query;
mod check_in_repository;
mod mood_analysis_source;
mod signing_key_source;
mod streak_repository;

#[cfg(test)]
pub use check_in_command::MockCheckInCommand;
pub use check_in_command::{
    AcceptedCheckIn, CheckInCommand, CheckInOutcome, CheckInRequest, FixtureCheckInCommand,
};
#[cfg(test)]
pub use check_in_query::MockCheckInQuery;
pub use check_in_query::{
    CheckInQuery, DEFAULT_HISTORY_LIMIT, HistoryPage, HistoryRequest, MAX_HISTORY_LIMIT,
};
#[cfg(test)]
pub use check_in_repository::MockCheckInRepository;
pub use check_in_repository::{
    CheckInPage, CheckInRepository, CheckInRepositoryError, FixtureCheckInRepository,
};
#[cfg(test)]
pub use mood_analysis_source::MockMoodAnalysisSource;
pub use mood_analysis_source::{MoodAnalysis, MoodAnalysisSource, MoodAnalysisSourceError};
#[cfg(test)]
pub use signing_key_source::MockSigningKeySource;
pub use signing_key_source::{SigningKey, SigningKeySource, SigningKeySourceError};
#[cfg(test)]
pub use streak_repository::MockStreakRepository;
pub use streak_repository::{FixtureStreakRepository, StreakRepository, StreakRepositoryError};
