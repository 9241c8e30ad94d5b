//! Learning assistant - The facade the vocabulary UI talks to
//!
//! Bundles speech capture, speech output, learning content and
//! pronunciation scoring behind one service.

use std::{fmt, sync::Arc};

use domain::{
    AdviceResult, Difficulty, LearnerLevel, PronunciationEvaluation, RecognitionResult,
    WordSuggestion,
};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{LearningContentPort, SpeechCapturePort, SpeechOutputPort},
};

/// Entry point for every learner-facing operation
pub struct LearningAssistant {
    content: Arc<dyn LearningContentPort>,
    capture: Arc<dyn SpeechCapturePort>,
    output: Arc<dyn SpeechOutputPort>,
}

impl fmt::Debug for LearningAssistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LearningAssistant")
            .field("capture_supported", &self.capture.is_supported())
            .field("output_supported", &self.output.is_supported())
            .finish_non_exhaustive()
    }
}

impl LearningAssistant {
    /// Create an assistant
    pub fn new(
        content: Arc<dyn LearningContentPort>,
        capture: Arc<dyn SpeechCapturePort>,
        output: Arc<dyn SpeechOutputPort>,
    ) -> Self {
        Self {
            content,
            capture,
            output,
        }
    }

    /// Listen for one spoken word
    #[instrument(skip(self))]
    pub async fn start_listening(&self) -> Result<RecognitionResult, ApplicationError> {
        self.capture.start_listening().await
    }

    /// Abort listening; safe to call when idle
    pub fn stop_listening(&self) {
        self.capture.stop_listening();
    }

    /// Whether speech capture is available on this platform
    pub fn is_speech_supported(&self) -> bool {
        self.capture.is_supported()
    }

    /// Encouragement for a learned word; `None` level means "beginner"
    #[instrument(skip(self))]
    pub async fn get_learning_advice(
        &self,
        word: &str,
        level: Option<LearnerLevel>,
    ) -> AdviceResult {
        let level = level.unwrap_or_default();
        self.content.learning_advice(word, &level).await
    }

    /// Next word to practice; `None` difficulty means easy
    #[instrument(skip(self, learned), fields(learned = learned.len()))]
    pub async fn get_next_word(
        &self,
        learned: &[String],
        difficulty: Option<Difficulty>,
    ) -> WordSuggestion {
        let suggestion = self
            .content
            .next_word(learned, difficulty.unwrap_or_default())
            .await;
        info!(word = %suggestion.word, "Next word suggested");
        suggestion
    }

    /// Score a recognized utterance against the target word
    pub fn evaluate_pronunciation(
        &self,
        recognized: &str,
        target: &str,
        confidence: f32,
    ) -> PronunciationEvaluation {
        let evaluation = domain::evaluate_pronunciation(recognized, target, confidence);
        debug!(
            score = evaluation.score,
            correct = evaluation.is_correct,
            "Pronunciation evaluated"
        );
        evaluation
    }

    /// Speak a word; `None` language means the configured default
    #[instrument(skip(self))]
    pub async fn speak_word(&self, word: &str, lang: Option<&str>) -> Result<(), ApplicationError> {
        self.output.speak(word, lang.map(str::to_string)).await
    }

    /// Cancel speech output; idempotent
    pub fn stop_speaking(&self) {
        self.output.stop();
    }
}
