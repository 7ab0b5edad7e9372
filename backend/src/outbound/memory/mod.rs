//! In-memory repositories for local runs and tests.
//!
//! Both stores keep their rows behind a mutex. They honour the same
//! atomicity and revision contracts the ports document, so services behave
//! identically against them and against a database adapter.

mod check_in_repository;
mod streak_repository;

pub use check_in_repository::InMemoryCheckInRepository;
pub use streak_repository::InMemoryStreakRepository;
