//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **openai**: chat-completions mood analysis source (reqwest)
//! - **jwks**: identity-provider signing key source (reqwest)
//! - **memory**: process-local check-in and streak repositories
//!
//! Adapters are thin translators between domain types and wire or storage
//! representations. They contain no business logic.

pub mod jwks;
pub mod memory;
pub mod openai;
