//! Speech adapters - Implement the speech ports using ai_speech
//!
//! The native recognizer and synthesizer are injected as engines; a platform
//! without them passes `None` and the ports report "not supported".

use std::sync::Arc;

use ai_speech::{
    RecognitionEngine, SpeechCaptureAdapter, SpeechConfig, SpeechError, SpeechOutputAdapter,
    SynthesisEngine,
};
use application::error::ApplicationError;
use application::ports::{SpeechCapturePort, SpeechOutputPort};
use async_trait::async_trait;
use domain::RecognitionResult;
use tracing::instrument;

/// Map speech error to application error
pub fn map_speech_error(err: SpeechError) -> ApplicationError {
    match err {
        SpeechError::NotAvailable(what) => ApplicationError::NotSupported(what),
        SpeechError::AlreadyListening => ApplicationError::AlreadyListening,
        SpeechError::NoSpeech => ApplicationError::NoSpeech,
        SpeechError::Recognition(code) => ApplicationError::Recognition(code),
        SpeechError::Timeout(ms) => ApplicationError::Timeout(ms),
        SpeechError::Configuration(e) => ApplicationError::Configuration(e),
        SpeechError::SynthesisFailed(e) => ApplicationError::Speech(e),
        SpeechError::ConnectionFailed(e) | SpeechError::RequestFailed(e) => {
            ApplicationError::ExternalService(e)
        },
        SpeechError::Upstream { status, message } => {
            ApplicationError::ExternalService(format!("Upstream status {status}: {message}"))
        },
        SpeechError::TranscriptionFailed(e) => {
            ApplicationError::ExternalService(format!("Transcription failed: {e}"))
        },
        SpeechError::InvalidResponse(e) => {
            ApplicationError::Internal(format!("Invalid response: {e}"))
        },
    }
}

/// Speech capture port backed by a native recognizer
#[derive(Debug)]
pub struct RecognitionAdapter {
    inner: SpeechCaptureAdapter,
}

impl RecognitionAdapter {
    /// Create an adapter over an optional engine
    pub fn new(engine: Option<Arc<dyn RecognitionEngine>>, config: &SpeechConfig) -> Self {
        Self {
            inner: SpeechCaptureAdapter::new(engine).with_listen_timeout(config.listen_timeout()),
        }
    }
}

#[async_trait]
impl SpeechCapturePort for RecognitionAdapter {
    #[instrument(skip(self))]
    async fn start_listening(&self) -> Result<RecognitionResult, ApplicationError> {
        self.inner.start_listening().await.map_err(map_speech_error)
    }

    fn stop_listening(&self) {
        self.inner.stop_listening();
    }

    fn is_supported(&self) -> bool {
        self.inner.is_supported()
    }
}

/// Speech output port backed by a native synthesizer
#[derive(Debug)]
pub struct SynthesisAdapter {
    inner: SpeechOutputAdapter,
}

impl SynthesisAdapter {
    /// Create an adapter over an optional engine
    pub fn new(engine: Option<Arc<dyn SynthesisEngine>>, config: &SpeechConfig) -> Self {
        Self {
            inner: SpeechOutputAdapter::new(engine).with_default_lang(config.default_lang.clone()),
        }
    }
}

#[async_trait]
impl SpeechOutputPort for SynthesisAdapter {
    #[instrument(skip(self, text))]
    async fn speak(&self, text: &str, lang: Option<String>) -> Result<(), ApplicationError> {
        self.inner
            .speak(text, lang.as_deref())
            .await
            .map_err(map_speech_error)
    }

    fn stop(&self) {
        self.inner.stop();
    }

    fn is_supported(&self) -> bool {
        self.inner.is_supported()
    }
}

#[cfg(test)]
mod tests {
    use ai_speech::{RecognitionEvent, RecognitionSettings, Utterance, VoiceInfo};
    use parking_lot::Mutex;
    use tokio::sync::mpsc;

    use super::*;

    struct OneWordEngine;

    impl RecognitionEngine for OneWordEngine {
        fn start(
            &self,
            _settings: &RecognitionSettings,
            events: mpsc::UnboundedSender<RecognitionEvent>,
        ) -> Result<(), SpeechError> {
            let _ = events.send(RecognitionEvent::Result {
                transcript: "Apple".to_string(),
                confidence: 0.91,
            });
            Ok(())
        }

        fn stop(&self) {}
    }

    #[derive(Default)]
    struct CapturingSynth {
        langs: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SynthesisEngine for CapturingSynth {
        fn voices(&self) -> Vec<VoiceInfo> {
            Vec::new()
        }

        async fn speak(&self, utterance: Utterance) -> Result<(), SpeechError> {
            self.langs.lock().push(utterance.lang);
            Ok(())
        }

        fn cancel(&self) {}
    }

    #[tokio::test]
    async fn recognition_adapter_returns_result() {
        let adapter = RecognitionAdapter::new(Some(Arc::new(OneWordEngine)), &SpeechConfig::default());
        let result = adapter.start_listening().await.unwrap();
        assert_eq!(result.text, "Apple");
        assert!(adapter.is_supported());
    }

    #[tokio::test]
    async fn missing_engines_are_not_supported() {
        let capture = RecognitionAdapter::new(None, &SpeechConfig::default());
        let output = SynthesisAdapter::new(None, &SpeechConfig::default());

        assert!(!capture.is_supported());
        assert!(matches!(
            capture.start_listening().await,
            Err(ApplicationError::NotSupported(_))
        ));
        assert!(matches!(
            output.speak("cat", None).await,
            Err(ApplicationError::NotSupported(_))
        ));
        output.stop();
        capture.stop_listening();
    }

    #[tokio::test]
    async fn synthesis_adapter_uses_configured_default_lang() {
        let engine = Arc::new(CapturingSynth::default());
        let config = SpeechConfig {
            default_lang: "en-GB".to_string(),
            ..Default::default()
        };
        let adapter = SynthesisAdapter::new(Some(engine.clone()), &config);

        adapter.speak("cat", None).await.unwrap();
        adapter.speak("dog", Some("en-AU".to_string())).await.unwrap();

        assert_eq!(*engine.langs.lock(), vec!["en-GB", "en-AU"]);
    }

    #[test]
    fn map_speech_error_variants() {
        assert!(matches!(
            map_speech_error(SpeechError::AlreadyListening),
            ApplicationError::AlreadyListening
        ));
        assert!(matches!(
            map_speech_error(SpeechError::NoSpeech),
            ApplicationError::NoSpeech
        ));
        assert!(matches!(
            map_speech_error(SpeechError::Recognition("aborted".into())),
            ApplicationError::Recognition(code) if code == "aborted"
        ));
        assert!(matches!(
            map_speech_error(SpeechError::Timeout(8000)),
            ApplicationError::Timeout(8000)
        ));
    }
}
