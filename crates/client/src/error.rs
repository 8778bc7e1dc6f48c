//! Error types for the gateway admin client.
//!
//! Every failure an admin API call can produce is folded into [`ClientError`]
//! at the HTTP boundary, so callers only ever see a tagged `Result`.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during gateway admin API calls.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The API answered with a non-2xx status or `success: false`.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The bearer token was rejected (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// The response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates the session is no longer authorized.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Check if this error is a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Message suitable for an operator-facing notification.
    ///
    /// Server-provided messages are passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Unauthorized(message) => format!("Session expired: {message}"),
            Self::Timeout(after) => format!(
                "Request timed out after {}s, press 'r' to retry",
                after.as_secs()
            ),
            other => other.to_string(),
        }
    }
}
