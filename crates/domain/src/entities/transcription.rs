//! Normalized transcription returned by the proxy endpoint

use serde::{Deserialize, Serialize};

/// Confidence reported when the upstream service does not provide one
pub const DEFAULT_TRANSCRIPTION_CONFIDENCE: f64 = 0.95;

/// Transcription in the proxy's fixed output shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Recognized text
    pub text: String,
    /// Detected or requested language code
    pub language: String,
    /// Audio length as reported upstream
    pub duration: f64,
    /// Recognition confidence
    pub confidence: f64,
}
