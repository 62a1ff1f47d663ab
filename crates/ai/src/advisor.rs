//! The advisor service: one chat turn against the provider.

use async_trait::async_trait;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::types::{AdvisorContext, AdvisorReply, ChatMessage, ChatRole, TokenUsage};

static SYSTEM_PROMPT: Lazy<String> = Lazy::new(|| {
    "You are the ScamGuard advisor, a patient fraud-awareness and financial-literacy coach. \
     Explain common scam patterns (phishing, smishing, vishing, crypto, romance, and \
     social-media fraud) in plain language, point out red flags, and suggest safe next steps. \
     Never ask for credentials, payment details, or personal identifiers, and remind users \
     never to share them."
        .to_string()
});

/// Trait for the advisor, so shells can mock the provider in tests.
#[async_trait]
pub trait AdvisorServiceTrait: Send + Sync {
    /// Sends one user turn (plus prior history) and returns the reply.
    async fn ask(
        &self,
        history: &[ChatMessage],
        user_message: &str,
        context: &AdvisorContext,
    ) -> Result<AdvisorReply, AdvisorError>;
}

pub struct AdvisorService {
    config: AdvisorConfig,
    client: reqwest::Client,
}

impl AdvisorService {
    pub fn new(config: AdvisorConfig) -> Self {
        AdvisorService {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn system_prompt(context: &AdvisorContext) -> String {
        let mut prompt = SYSTEM_PROMPT.clone();
        if let (Some(kind), Some(summary)) = (context.completed_kind, &context.last_summary) {
            prompt.push_str(&format!(
                " The user just completed a {} simulation, answering {} of {} scenarios \
                 correctly ({}%). Tailor your coaching to that result.",
                kind, summary.correct_count, summary.total, summary.score
            ));
        }
        prompt
    }

    fn build_request(
        &self,
        history: &[ChatMessage],
        user_message: &str,
        context: &AdvisorContext,
    ) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(WireMessage {
            role: "system".to_string(),
            content: Self::system_prompt(context),
        });
        for message in history {
            messages.push(WireMessage::from(message));
        }
        messages.push(WireMessage {
            role: "user".to_string(),
            content: user_message.to_string(),
        });

        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: 0.3,
        }
    }
}

#[async_trait]
impl AdvisorServiceTrait for AdvisorService {
    async fn ask(
        &self,
        history: &[ChatMessage],
        user_message: &str,
        context: &AdvisorContext,
    ) -> Result<AdvisorReply, AdvisorError> {
        if user_message.trim().is_empty() {
            return Err(AdvisorError::invalid_input("message is empty"));
        }

        let request = self.build_request(history, user_message, context);
        let url = format!(
            "{}/chat/completions",
            self.config.api_base_url.trim_end_matches('/')
        );
        debug!("Advisor request to {} with model {}", url, request.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::provider(format!(
                "HTTP {} from provider: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        parse_reply(completion, &self.config.model)
    }
}

fn parse_reply(
    completion: ChatCompletionResponse,
    model: &str,
) -> Result<AdvisorReply, AdvisorError> {
    let content = completion
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AdvisorError::EmptyReply(model.to_string()))?;

    Ok(AdvisorReply {
        content,
        model: completion.model.unwrap_or_else(|| model.to_string()),
        usage: completion.usage,
    })
}

// ============================================================================
// Wire types (OpenAI-compatible chat completions)
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(message: &ChatMessage) -> Self {
        let role = match message.role {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        };
        WireMessage {
            role: role.to_string(),
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: WireMessage,
}
