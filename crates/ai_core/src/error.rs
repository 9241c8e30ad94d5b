//! Completion errors

use thiserror::Error;

/// Errors that can occur while requesting a completion
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Failed to connect to the completion endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the completion endpoint failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Client is not configured (missing or placeholder key)
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during completion
    #[error("Completion timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Server error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl CompletionError {
    /// Classify a transport error; `timeout_ms` is the client's configured limit
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message() {
        let err = CompletionError::ServerError("Status 500".to_string());
        assert_eq!(err.to_string(), "Server error: Status 500");
    }

    #[test]
    fn timeout_error_message() {
        let err = CompletionError::Timeout(30000);
        assert_eq!(err.to_string(), "Completion timeout after 30000ms");
    }

    #[test]
    fn not_configured_error_message() {
        let err = CompletionError::NotConfigured("missing API key".to_string());
        assert_eq!(err.to_string(), "Not configured: missing API key");
    }
}
