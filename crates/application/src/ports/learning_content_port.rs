//! Learning content port - Advice messages and next-word suggestions

use async_trait::async_trait;
use domain::{AdviceResult, Difficulty, LearnerLevel, WordSuggestion};
#[cfg(test)]
use mockall::automock;

/// Port for producing learning content
///
/// Both operations are infallible: implementations degrade to static
/// content instead of surfacing errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LearningContentPort: Send + Sync {
    /// Encouraging message for a freshly learned word
    async fn learning_advice(&self, word: &str, level: &LearnerLevel) -> AdviceResult;

    /// Next word to practice at `difficulty`
    async fn next_word(&self, learned: &[String], difficulty: Difficulty) -> WordSuggestion;
}
