//! Chat types for the advisor.

use serde::{Deserialize, Serialize};

use scamguard_core::scenarios::SimulationKind;
use scamguard_core::simulation::QuizSummary;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message in an advisor conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Optional quiz context woven into the system prompt so the advisor can
/// coach against the user's actual results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorContext {
    /// The simulation category the user just finished, if any.
    pub completed_kind: Option<SimulationKind>,
    /// The summary of that run.
    pub last_summary: Option<QuizSummary>,
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    #[serde(default, alias = "prompt_tokens")]
    pub prompt_tokens: u32,
    #[serde(default, alias = "completion_tokens")]
    pub completion_tokens: u32,
    #[serde(default, alias = "total_tokens")]
    pub total_tokens: u32,
}

/// The advisor's reply to one user turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorReply {
    pub content: String,
    pub model: String,
    pub usage: Option<TokenUsage>,
}
