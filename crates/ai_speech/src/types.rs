//! Types for speech processing
//!
//! Uploaded audio, transcriptions, voices, utterances and the events a
//! native recognizer reports during a capture session.

use bytes::Bytes;
use domain::{DEFAULT_TRANSCRIPTION_CONFIDENCE, TranscriptionResponse};
use serde::{Deserialize, Serialize};

/// Language reported when the upstream service does not detect one
pub const DEFAULT_TRANSCRIPTION_LANGUAGE: &str = "en";

/// File name the recorded audio is uploaded under
pub const UPLOAD_FILE_NAME: &str = "audio.webm";

/// MIME type of browser recordings
pub const UPLOAD_MIME_TYPE: &str = "audio/webm";

/// Recorded WebM audio forwarded to the transcription service
#[derive(Debug, Clone)]
pub struct AudioData {
    data: Bytes,
}

impl AudioData {
    /// Create new audio data
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Consume and return the raw audio bytes
    #[must_use]
    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// Get the size in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// Result of a speech-to-text transcription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// The transcribed text
    pub text: String,
    /// Detected language (ISO 639-1 code)
    pub language: Option<String>,
    /// Audio length as reported by the service
    pub duration: Option<f64>,
    /// Confidence score (0.0 - 1.0)
    pub confidence: Option<f64>,
}

impl Transcription {
    /// Create a new transcription result
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            duration: None,
            confidence: None,
        }
    }

    /// Set the detected language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the reported duration
    #[must_use]
    pub const fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the confidence score
    #[must_use]
    pub const fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Normalize into the fixed four-field response shape
    #[must_use]
    pub fn into_response(self) -> TranscriptionResponse {
        TranscriptionResponse {
            text: self.text,
            language: self
                .language
                .filter(|lang| !lang.is_empty())
                .unwrap_or_else(|| DEFAULT_TRANSCRIPTION_LANGUAGE.to_string()),
            duration: self.duration.unwrap_or(0.0),
            confidence: self.confidence.unwrap_or(DEFAULT_TRANSCRIPTION_CONFIDENCE),
        }
    }
}

/// A voice offered by the speech output engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Engine-specific voice identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// BCP 47 language tag, e.g. `en-GB`
    pub lang: String,
}

impl VoiceInfo {
    /// Create a new voice info
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lang: lang.into(),
        }
    }

    /// Whether this voice speaks English
    #[must_use]
    pub fn is_english(&self) -> bool {
        self.lang.starts_with("en")
    }
}

/// One request to the speech output engine
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Text to speak
    pub text: String,
    /// Language tag
    pub lang: String,
    /// Speaking rate (1.0 = engine default)
    pub rate: f32,
    /// Voice pitch (1.0 = engine default)
    pub pitch: f32,
    /// Explicit voice, or engine default when absent
    pub voice: Option<VoiceInfo>,
}

/// Settings applied to every capture session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionSettings {
    /// Recognition language tag
    pub lang: String,
    /// Keep listening after the first final result
    pub continuous: bool,
    /// Report partial results
    pub interim_results: bool,
    /// Number of alternatives per result
    pub max_alternatives: u32,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            lang: "en-US".to_string(),
            continuous: false,
            interim_results: false,
            max_alternatives: 1,
        }
    }
}

/// Event emitted by a native recognizer during a session
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    /// Final transcript of the first alternative
    Result {
        /// Recognized text
        transcript: String,
        /// Confidence in `[0, 1]`
        confidence: f32,
    },
    /// Native error code such as `no-speech` or `not-allowed`
    Error(String),
    /// The session ended
    End,
}
