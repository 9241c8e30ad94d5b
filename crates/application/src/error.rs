//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Completion/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The platform lacks the requested speech capability
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// A capture session is already running
    #[error("Already listening")]
    AlreadyListening,

    /// Capture ended without recognized speech
    #[error("No speech recognized")]
    NoSpeech,

    /// Native recognizer error code
    #[error("Speech recognition error: {0}")]
    Recognition(String),

    /// Speech output failed
    #[error("Speech output error: {0}")]
    Speech(String),

    /// Operation exceeded its time limit
    #[error("Timed out after {0}ms")]
    Timeout(u64),

    /// Requested item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
