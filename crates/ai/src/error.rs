//! AI advisor error types.

use thiserror::Error;

/// AI advisor errors.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key in the environment/configuration.
    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    /// Provider transport or HTTP error.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider returned a well-formed but empty reply.
    #[error("Provider returned an empty reply from model {0}")]
    EmptyReply(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdvisorError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Error code for programmatic handling by shells.
    pub fn code(&self) -> &'static str {
        match self {
            AdvisorError::InvalidInput(_) => "INVALID_INPUT",
            AdvisorError::MissingApiKey(_) => "MISSING_API_KEY",
            AdvisorError::Provider(_) => "PROVIDER_ERROR",
            AdvisorError::EmptyReply(_) => "EMPTY_REPLY",
            AdvisorError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<reqwest::Error> for AdvisorError {
    fn from(err: reqwest::Error) -> Self {
        AdvisorError::Provider(err.to_string())
    }
}
