//! Speech output port - Speaking words aloud

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speech output
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechOutputPort: Send + Sync {
    /// Speak `text`, resolving when playback ends
    ///
    /// # Arguments
    /// * `text` - Text to speak
    /// * `lang` - Language tag, `None` for the configured default
    async fn speak(&self, text: &str, lang: Option<String>) -> Result<(), ApplicationError>;

    /// Cancel any speech; idempotent
    fn stop(&self);

    /// Whether the platform can speak
    fn is_supported(&self) -> bool;
}
