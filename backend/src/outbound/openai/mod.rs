//! Chat-completions adapter for mood analysis.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_OPENAI_MODEL, OpenAiMoodSource};
