use crate::config::ConfigError;

/// Errors raised while setting up frames: element registration and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("Invalid custom element name: {0}")]
    InvalidElementName(String),

    #[error("Custom element already defined: {0}")]
    AlreadyDefined(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Outcome of a failed navigation. Stored verbatim in a frame's settled slot, so it
/// must be cheap to clone for every observer awaiting the same load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Navigation canceled")]
    Canceled,

    #[error("Internal navigation error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for NavigationError {
    fn from(e: reqwest::Error) -> Self {
        NavigationError::Network(e.to_string())
    }
}
