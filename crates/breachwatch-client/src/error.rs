//! Error types for lookup operations.

use breachwatch_core::ConfigError;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a lookup.
///
/// A 404 from the service is not represented here: it is an empty result.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The service rejected the identifier's format (HTTP 400)
    #[error("the account does not comply with an acceptable format")]
    InvalidFormat,

    /// The API key is missing or was rejected (HTTP 401)
    #[error("valid header `hibp-api-key` required")]
    Unauthorized,

    /// The request quota has been exceeded (HTTP 429)
    #[error("rate limit exceeded{}", retry_hint(.retry_after))]
    RateLimited {
        /// Delay requested by the service's `Retry-After` header
        retry_after: Option<Duration>,
    },

    /// The service answered with a status outside the documented set
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// The request failed before a complete response was received
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response did not match the expected schema
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client configuration is unusable
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl LookupError {
    /// Whether repeating the same request later could succeed.
    ///
    /// Backoff is left to the caller.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::Transport(_) => true,
            Self::UnexpectedStatus { status } => *status >= 500,
            Self::InvalidFormat
            | Self::Unauthorized
            | Self::Decode(_)
            | Self::Config(_)
            | Self::Internal(_) => false,
        }
    }
}

#[allow(clippy::ref_option)]
fn retry_hint(retry_after: &Option<Duration>) -> String {
    retry_after
        .map(|delay| format!(", retry after {}s", delay.as_secs()))
        .unwrap_or_default()
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
