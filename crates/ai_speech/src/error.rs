//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech capture, output or transcription
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to the transcription service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the transcription service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream service answered with a non-success status
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        /// HTTP status returned by the upstream service
        status: u16,
        /// Message extracted from the upstream body
        message: String,
    },

    /// Upstream accepted the audio but produced no usable text
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Speech output failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid response from service or engine
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during processing
    #[error("Speech processing timeout after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The platform has no engine for this capability
    #[error("Provider not available: {0}")]
    NotAvailable(String),

    /// A capture session is already in progress
    #[error("Speech recognition is already listening")]
    AlreadyListening,

    /// The capture session ended without any recognized speech
    #[error("No speech was recognized")]
    NoSpeech,

    /// The native recognizer reported an error code
    #[error("Speech recognition error: {0}")]
    Recognition(String),
}

impl SpeechError {
    /// Classify a transport error; `timeout_ms` is the client's configured limit
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
