//! ScamGuard AI - the fraud-awareness advisor.
//!
//! A thin chat layer over an OpenAI-compatible chat-completions endpoint.
//! The provider base URL, model, and API key come from configuration; the
//! credential is never embedded in code and the request is made by whatever
//! backend hosts this crate, not by untrusted clients.

mod advisor;
mod config;
mod error;
mod types;

pub use advisor::{AdvisorService, AdvisorServiceTrait};
pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use types::{AdvisorContext, AdvisorReply, ChatMessage, ChatRole, TokenUsage};
