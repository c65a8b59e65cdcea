//! Error types for signet-github.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authentication failed or token invalid. Carries GitHub's message.
    #[error("{0}")]
    AuthenticationFailed(String),

    /// API rate limit exceeded. Carries GitHub's message.
    #[error("{0}")]
    RateLimited(String),

    /// The reference being updated does not exist.
    #[error("Reference does not exist: {0}")]
    RefNotFound(String),

    /// Any other error response. Displays GitHub's message as-is.
    #[error("{message}")]
    ApiError { status: u16, message: String },

    /// The configured API base URL cannot be used.
    #[error("invalid GitHub API URL: {0}")]
    InvalidBaseUrl(String),

    /// Network error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse GitHub response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status of an API error, if the server answered with one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed(_) => Some(401),
            Self::RateLimited(_) => Some(403),
            Self::RefNotFound(_) => Some(422),
            Self::ApiError { status, .. } => Some(*status),
            Self::InvalidBaseUrl(_) | Self::Network(_) | Self::Parse(_) => None,
        }
    }
}
