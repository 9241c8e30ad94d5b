//! Speech output with a lazily refreshed voice cache

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, instrument};

use crate::error::SpeechError;
use crate::ports::SynthesisEngine;
use crate::types::{Utterance, VoiceInfo};

/// Speaking rate, slightly slower than the engine default
pub const SPEECH_RATE: f32 = 0.9;

/// Voice pitch, slightly higher than the engine default
pub const SPEECH_PITCH: f32 = 1.1;

/// Language used when `speak` is called without one
pub const DEFAULT_SPEECH_LANG: &str = "en-US";

/// Speaks text through a native synthesizer, preferring an English voice
pub struct SpeechOutputAdapter {
    engine: Option<Arc<dyn SynthesisEngine>>,
    voices: RwLock<Vec<VoiceInfo>>,
    default_lang: String,
}

impl fmt::Debug for SpeechOutputAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechOutputAdapter")
            .field("supported", &self.engine.is_some())
            .field("cached_voices", &self.voices.read().len())
            .field("default_lang", &self.default_lang)
            .finish_non_exhaustive()
    }
}

impl SpeechOutputAdapter {
    /// Create an adapter; `None` means the platform has no synthesizer
    #[must_use]
    pub fn new(engine: Option<Arc<dyn SynthesisEngine>>) -> Self {
        let voices = engine.as_ref().map(|e| e.voices()).unwrap_or_default();
        if engine.is_some() && voices.is_empty() {
            debug!("Voice list not loaded yet, refreshing on first speak");
        }

        Self {
            engine,
            voices: RwLock::new(voices),
            default_lang: DEFAULT_SPEECH_LANG.to_string(),
        }
    }

    /// Override the language used when `speak` gets none
    #[must_use]
    pub fn with_default_lang(mut self, lang: impl Into<String>) -> Self {
        self.default_lang = lang.into();
        self
    }

    /// Whether a synthesizer is present
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.engine.is_some()
    }

    /// Currently cached voices
    #[must_use]
    pub fn voices(&self) -> Vec<VoiceInfo> {
        self.voices.read().clone()
    }

    /// Speak `text`, resolving when playback finishes
    #[instrument(skip(self), fields(text_len = text.len()))]
    pub async fn speak(&self, text: &str, lang: Option<&str>) -> Result<(), SpeechError> {
        let engine = self
            .engine
            .as_ref()
            .ok_or_else(|| SpeechError::NotAvailable("speech synthesis".to_string()))?;

        let utterance = Utterance {
            text: text.to_string(),
            lang: lang.unwrap_or(&self.default_lang).to_string(),
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
            voice: self.english_voice(engine.as_ref()),
        };

        debug!(
            lang = %utterance.lang,
            voice = utterance.voice.as_ref().map(|v| v.name.as_str()),
            "Speaking"
        );
        engine.speak(utterance).await
    }

    /// Cancel any speech; safe to call repeatedly
    pub fn stop(&self) {
        if let Some(engine) = &self.engine {
            engine.cancel();
        }
    }

    fn english_voice(&self, engine: &dyn SynthesisEngine) -> Option<VoiceInfo> {
        if self.voices.read().is_empty() {
            let loaded = engine.voices();
            if !loaded.is_empty() {
                info!(count = loaded.len(), "Voice list loaded");
                *self.voices.write() = loaded;
            }
        }

        self.voices.read().iter().find(|v| v.is_english()).cloned()
    }
}
