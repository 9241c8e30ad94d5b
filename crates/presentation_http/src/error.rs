//! API error handling
//!
//! Every failure of the transcription proxy is answered with a JSON body
//! carrying an `error` field; internal failures add a `message`.

use ai_speech::{MISSING_CREDENTIALS_MESSAGE, SpeechError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Endpoint only accepts POST
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Server-side secrets or settings are missing
    #[error("{0}")]
    Configuration(String),

    /// Upstream answered with a non-success status
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        /// Status to pass through to the client
        status: u16,
        /// Message extracted from the upstream body
        message: String,
    },

    /// Upstream accepted the audio but recognized nothing
    #[error("{0}")]
    Recognition(String),

    /// Uploaded audio exceeds the configured limit
    #[error("Audio payload exceeds {0} bytes")]
    PayloadTooLarge(usize),

    /// Anything else
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Missing transcription credentials
    #[must_use]
    pub fn missing_credentials() -> Self {
        Self::Configuration(MISSING_CREDENTIALS_MESSAGE.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Underlying failure, only for internal errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
            ),
            Self::Configuration(msg) | Self::Recognition(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            },
            Self::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
                None,
            ),
            Self::PayloadTooLarge(limit) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Audio payload exceeds {limit} bytes"),
                None,
            ),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(msg),
                )
            },
        };

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}

impl From<SpeechError> for ApiError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::Upstream { status, message } => Self::Upstream { status, message },
            SpeechError::TranscriptionFailed(msg) => Self::Recognition(msg),
            SpeechError::Configuration(msg) => Self::Configuration(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}
