//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech engines and services must implement.
//! Native recognizers and synthesizers live outside this crate; the adapters
//! in `recognition` and `synthesis` drive them through these seams.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::SpeechError;
use crate::types::{AudioData, RecognitionEvent, RecognitionSettings, Transcription, Utterance, VoiceInfo};

/// Port for Speech-to-Text (STT) services
///
/// # Example
///
/// ```ignore
/// use ai_speech::{SpeechToText, AudioData};
///
/// async fn transcribe_recording(
///     stt: &impl SpeechToText,
///     audio: AudioData,
/// ) -> Result<String, SpeechError> {
///     let transcription = stt.transcribe_with_language(audio, "en").await?;
///     Ok(transcription.text)
/// }
/// ```
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails.
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError>;

    /// Transcribe audio with a language hint (ISO 639-1 code, e.g. "en", "zh")
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails.
    async fn transcribe_with_language(
        &self,
        audio: AudioData,
        language: &str,
    ) -> Result<Transcription, SpeechError>;

    /// Get the name of the current STT model
    fn model_name(&self) -> &str;
}

/// Port for a native speech recognizer
///
/// `start` begins one session and returns immediately; the engine then
/// reports `RecognitionEvent`s on `events` and should finish with `End`.
pub trait RecognitionEngine: Send + Sync {
    /// Begin a capture session
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the engine refuses to start.
    fn start(
        &self,
        settings: &RecognitionSettings,
        events: mpsc::UnboundedSender<RecognitionEvent>,
    ) -> Result<(), SpeechError>;

    /// Abort the active session
    fn stop(&self);
}

/// Port for a native speech synthesizer
#[async_trait]
pub trait SynthesisEngine: Send + Sync {
    /// Voices currently known to the engine (may be empty until loaded)
    fn voices(&self) -> Vec<VoiceInfo>;

    /// Speak an utterance, resolving once playback has finished
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if playback fails.
    async fn speak(&self, utterance: Utterance) -> Result<(), SpeechError>;

    /// Cancel any queued or playing speech
    fn cancel(&self);
}
