//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Confidence value outside of `[0, 1]`
    #[error("Invalid confidence: {0}")]
    InvalidConfidence(f32),
}
