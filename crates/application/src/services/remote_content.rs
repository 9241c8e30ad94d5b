//! Learning content generated by a language model
//!
//! Every failure of the remote path is logged and answered from the
//! static provider, so callers never see an error.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::{AdviceResult, Difficulty, LearnerLevel, WordSuggestion};
use tracing::{debug, instrument, warn};

use crate::ports::{CompletionOptions, CompletionPort, LearningContentPort};
use crate::services::StaticContentProvider;

const ADVICE_SYSTEM_PROMPT: &str = "You are a helpful English learning assistant for children. Provide simple, encouraging feedback.";

const NEXT_WORD_SYSTEM_PROMPT: &str =
    "You are an English vocabulary teacher for children. Suggest age-appropriate words.";

const ADVICE_OPTIONS: CompletionOptions = CompletionOptions::new(100, 0.7);
const NEXT_WORD_OPTIONS: CompletionOptions = CompletionOptions::new(10, 0.8);

fn advice_prompt(word: &str) -> String {
    format!(
        "The child just learned the word \"{word}\". Give a short, encouraging message and a simple example sentence. Keep it under 50 words."
    )
}

fn next_word_prompt(learned: &[String], difficulty: Difficulty) -> String {
    format!(
        "Suggest one {difficulty} English word for a child to learn. Already learned: {}. Only return the word, nothing else.",
        learned.join(", ")
    )
}

/// Asks a completion model first, static content second
pub struct RemoteContentProvider {
    completion: Arc<dyn CompletionPort>,
    fallback: StaticContentProvider,
}

impl fmt::Debug for RemoteContentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteContentProvider")
            .field("model", &self.completion.model_name())
            .finish_non_exhaustive()
    }
}

impl RemoteContentProvider {
    /// Create a provider over `completion`
    pub fn new(completion: Arc<dyn CompletionPort>, fallback: StaticContentProvider) -> Self {
        Self {
            completion,
            fallback,
        }
    }
}

#[async_trait]
impl LearningContentPort for RemoteContentProvider {
    #[instrument(skip(self, level), fields(level = %level))]
    async fn learning_advice(&self, word: &str, level: &LearnerLevel) -> AdviceResult {
        match self
            .completion
            .complete(ADVICE_SYSTEM_PROMPT, &advice_prompt(word), ADVICE_OPTIONS)
            .await
        {
            Ok(advice) if !advice.trim().is_empty() => {
                debug!(advice_len = advice.len(), "Generated advice");
                AdviceResult::new(advice)
            },
            Ok(_) => {
                warn!("Completion returned empty advice, using static content");
                self.fallback.advice(word)
            },
            Err(e) => {
                warn!(error = %e, "Advice generation failed, using static content");
                self.fallback.advice(word)
            },
        }
    }

    #[instrument(skip(self, learned), fields(learned = learned.len()))]
    async fn next_word(&self, learned: &[String], difficulty: Difficulty) -> WordSuggestion {
        match self
            .completion
            .complete(
                NEXT_WORD_SYSTEM_PROMPT,
                &next_word_prompt(learned, difficulty),
                NEXT_WORD_OPTIONS,
            )
            .await
        {
            Ok(word) if !word.trim().is_empty() => {
                let word = word.trim().to_lowercase();
                debug!(%word, "Generated next word");
                WordSuggestion::new(word)
            },
            Ok(_) => {
                warn!("Completion returned no word, using static content");
                self.fallback.word(difficulty)
            },
            Err(e) => {
                warn!(error = %e, "Word suggestion failed, using static content");
                self.fallback.word(difficulty)
            },
        }
    }
}

/// Pick the content strategy once: remote when a completion model exists
pub fn learning_content_strategy(
    completion: Option<Arc<dyn CompletionPort>>,
) -> Arc<dyn LearningContentPort> {
    match completion {
        Some(completion) => {
            debug!(model = %completion.model_name(), "Using remote learning content");
            Arc::new(RemoteContentProvider::new(
                completion,
                StaticContentProvider::new(),
            ))
        },
        None => {
            debug!("No completion model configured, using static learning content");
            Arc::new(StaticContentProvider::new())
        },
    }
}
