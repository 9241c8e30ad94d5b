//! Application state shared across handlers

use std::{fmt, sync::Arc};

use ai_speech::{MinimaxSpeechProvider, SpeechToText};
use infrastructure::AppConfig;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Upstream transcription client; `None` when credentials are missing
    pub transcriber: Option<Arc<dyn SpeechToText>>,
    /// Maximum accepted audio upload in bytes
    pub max_audio_bytes: usize,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("transcription_configured", &self.transcriber.is_some())
            .field("max_audio_bytes", &self.max_audio_bytes)
            .finish()
    }
}

impl AppState {
    /// Build state from resolved configuration
    ///
    /// A provider that fails to initialize is treated like missing
    /// credentials; the proxy then answers with a configuration error.
    pub fn from_config(config: &AppConfig) -> Self {
        let transcriber = if config.transcription.has_credentials() {
            match MinimaxSpeechProvider::new(config.transcription.clone()) {
                Ok(provider) => {
                    info!(model = %config.transcription.model, "Transcription proxy enabled");
                    Some(Arc::new(provider) as Arc<dyn SpeechToText>)
                },
                Err(e) => {
                    warn!(error = %e, "Failed to initialize transcription provider");
                    None
                },
            }
        } else {
            None
        };

        Self {
            transcriber,
            max_audio_bytes: config.server.max_body_size_audio_bytes,
        }
    }

    /// Whether the transcription proxy can serve requests
    pub fn transcription_configured(&self) -> bool {
        self.transcriber.is_some()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn default_config_has_no_transcriber() {
        let state = AppState::from_config(&AppConfig::default());
        assert!(!state.transcription_configured());
        assert_eq!(state.max_audio_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn credentials_enable_transcriber() {
        let mut config = AppConfig::default();
        config.transcription.api_key = Some(SecretString::from("mm-key"));
        config.transcription.group_id = Some("group".to_string());

        let state = AppState::from_config(&config);
        assert!(state.transcription_configured());
        assert!(format!("{state:?}").contains("transcription_configured: true"));
    }
}
