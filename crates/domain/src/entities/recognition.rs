//! Result of a single speech capture session

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Text recognized from one capture session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Best transcript reported by the recognizer
    pub text: String,
    /// Recognizer confidence in `[0, 1]`
    pub confidence: f32,
}

impl RecognitionResult {
    /// Create a result, rejecting confidences outside `[0, 1]`
    pub fn new(text: impl Into<String>, confidence: f32) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(DomainError::InvalidConfidence(confidence));
        }

        Ok(Self {
            text: text.into(),
            confidence,
        })
    }
}
