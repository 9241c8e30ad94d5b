//! Speech capture port - One-shot listening on the learner's microphone

use async_trait::async_trait;
use domain::RecognitionResult;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for capturing a single spoken utterance
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechCapturePort: Send + Sync {
    /// Listen until one result, an error, or end of session
    async fn start_listening(&self) -> Result<RecognitionResult, ApplicationError>;

    /// Abort the active session; no-op when idle
    fn stop_listening(&self);

    /// Whether the platform can capture speech
    fn is_supported(&self) -> bool;
}
