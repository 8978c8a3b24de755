// ABOUTME: Error types for configuration, authentication, and IdeaCenter API calls
// ABOUTME: Any error surfacing before the first scenario runs is fatal for the whole suite

use thiserror::Error;

/// Result type for IdeaCenter client operations
pub type ClientResult<T> = Result<T, IdeaCenterError>;

/// Errors produced by the IdeaCenter client
#[derive(Debug, Error)]
pub enum IdeaCenterError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl IdeaCenterError {
    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid response error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Check if this is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(self, IdeaCenterError::Network(_))
    }

    /// Check if this is an authentication error
    pub fn is_auth_error(&self) -> bool {
        matches!(self, IdeaCenterError::Authentication(_))
    }
}

impl From<reqwest::Error> for IdeaCenterError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
