//! Advisor configuration.

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

pub const ENV_API_KEY: &str = "SCAMGUARD_AI_API_KEY";
pub const ENV_BASE_URL: &str = "SCAMGUARD_AI_BASE_URL";
pub const ENV_MODEL: &str = "SCAMGUARD_AI_MODEL";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for the generative-AI provider.
///
/// The API key always comes from the environment or the hosting backend's
/// secret store; it is never a compile-time constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorConfig {
    pub api_base_url: String,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: String,
}

impl AdvisorConfig {
    pub fn new(
        api_base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        AdvisorConfig {
            api_base_url: api_base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads the configuration from the environment.
    ///
    /// Base URL and model fall back to defaults; a missing API key is an
    /// error, since there is no safe default for a credential.
    pub fn from_env() -> Result<Self, AdvisorError> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| AdvisorError::MissingApiKey(ENV_API_KEY.to_string()))?;
        Ok(AdvisorConfig {
            api_base_url: std::env::var(ENV_BASE_URL)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_key,
        })
    }
}
