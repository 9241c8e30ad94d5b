//! Learning assistant wiring
//!
//! Builds a [`LearningAssistant`] from configuration and whatever native
//! speech engines the host platform provides.

use std::sync::Arc;

use ai_speech::{RecognitionEngine, SynthesisEngine};
use application::error::ApplicationError;
use application::ports::CompletionPort;
use application::services::{LearningAssistant, learning_content_strategy};
use tracing::info;

use crate::adapters::{CompletionAdapter, RecognitionAdapter, SynthesisAdapter};
use crate::config::AppConfig;

/// Native engines available on the host; either may be absent
#[derive(Default)]
pub struct SpeechEngines {
    /// Speech recognizer
    pub recognition: Option<Arc<dyn RecognitionEngine>>,
    /// Speech synthesizer
    pub synthesis: Option<Arc<dyn SynthesisEngine>>,
}

impl std::fmt::Debug for SpeechEngines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechEngines")
            .field("recognition", &self.recognition.is_some())
            .field("synthesis", &self.synthesis.is_some())
            .finish()
    }
}

/// Assemble the assistant
///
/// The content strategy is fixed here: remote completions when the
/// completion key is configured, static content otherwise.
pub fn build_learning_assistant(
    config: &AppConfig,
    engines: SpeechEngines,
) -> Result<LearningAssistant, ApplicationError> {
    let completion = CompletionAdapter::from_config(&config.completion)?
        .map(|adapter| Arc::new(adapter) as Arc<dyn CompletionPort>);

    info!(
        remote_content = completion.is_some(),
        recognition = engines.recognition.is_some(),
        synthesis = engines.synthesis.is_some(),
        "Building learning assistant"
    );

    let content = learning_content_strategy(completion);
    let capture = Arc::new(RecognitionAdapter::new(engines.recognition, &config.speech));
    let output = Arc::new(SynthesisAdapter::new(engines.synthesis, &config.speech));

    Ok(LearningAssistant::new(content, capture, output))
}

#[cfg(test)]
mod tests {
    use domain::vocabulary::{advice_templates, words_for};
    use domain::Difficulty;

    use super::*;

    #[tokio::test]
    async fn unconfigured_assistant_uses_static_content() {
        let assistant =
            build_learning_assistant(&AppConfig::default(), SpeechEngines::default()).unwrap();

        assert!(!assistant.is_speech_supported());

        let advice = assistant.get_learning_advice("sun", None).await;
        assert!(advice.success);
        assert!(advice_templates("sun").contains(&advice.advice));

        let word = assistant.get_next_word(&[], Some(Difficulty::Medium)).await;
        assert!(words_for(Difficulty::Medium).contains(&word.word.as_str()));
    }

    #[tokio::test]
    async fn missing_engines_fail_loudly() {
        let assistant =
            build_learning_assistant(&AppConfig::default(), SpeechEngines::default()).unwrap();

        assert!(matches!(
            assistant.start_listening().await,
            Err(ApplicationError::NotSupported(_))
        ));
        assert!(matches!(
            assistant.speak_word("cat", None).await,
            Err(ApplicationError::NotSupported(_))
        ));
        assistant.stop_listening();
        assistant.stop_speaking();
    }

    #[test]
    fn engines_debug_reports_presence() {
        let debug = format!("{:?}", SpeechEngines::default());
        assert!(debug.contains("recognition: false"));
    }
}
