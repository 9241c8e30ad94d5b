//! Static learning content used without a language model

use std::fmt;

use async_trait::async_trait;
use domain::vocabulary::{ADVICE_TEMPLATE_COUNT, advice_templates, words_for};
use domain::{AdviceResult, Difficulty, LearnerLevel, WordSuggestion};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::ports::LearningContentPort;

/// Picks advice templates and tier words uniformly at random
pub struct StaticContentProvider {
    rng: Mutex<StdRng>,
}

impl fmt::Debug for StaticContentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticContentProvider").finish_non_exhaustive()
    }
}

impl Default for StaticContentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticContentProvider {
    /// Provider seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic provider for reproducible selection
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// One of the four encouragement templates for `word`
    pub fn advice(&self, word: &str) -> AdviceResult {
        let index = self.rng.lock().random_range(0..ADVICE_TEMPLATE_COUNT);
        let [a, b, c, d] = advice_templates(word);
        let advice = match index {
            0 => a,
            1 => b,
            2 => c,
            _ => d,
        };
        AdviceResult::new(advice)
    }

    /// A random word from the tier list
    pub fn word(&self, difficulty: Difficulty) -> WordSuggestion {
        let words = words_for(difficulty);
        let word = words.choose(&mut *self.rng.lock()).copied().unwrap_or_default();
        debug!(%difficulty, word, "Picked static word");
        WordSuggestion::new(word)
    }
}

#[async_trait]
impl LearningContentPort for StaticContentProvider {
    async fn learning_advice(&self, word: &str, _level: &LearnerLevel) -> AdviceResult {
        self.advice(word)
    }

    async fn next_word(&self, _learned: &[String], difficulty: Difficulty) -> WordSuggestion {
        self.word(difficulty)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn advice_is_one_of_the_templates() {
        let provider = StaticContentProvider::with_seed(7);
        let templates = advice_templates("apple");

        for _ in 0..50 {
            let result = provider.advice("apple");
            assert!(result.success);
            assert!(templates.contains(&result.advice));
        }
    }

    #[test]
    fn advice_covers_every_template() {
        let provider = StaticContentProvider::with_seed(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(provider.advice("sun").advice);
        }
        assert_eq!(seen.len(), ADVICE_TEMPLATE_COUNT);
    }

    #[test]
    fn words_come_from_the_requested_tier() {
        let provider = StaticContentProvider::with_seed(3);
        for difficulty in Difficulty::all() {
            for _ in 0..20 {
                let suggestion = provider.word(difficulty);
                assert!(suggestion.success);
                assert!(words_for(difficulty).contains(&suggestion.word.as_str()));
            }
        }
    }

    #[test]
    fn unknown_tier_uses_easy_words() {
        let provider = StaticContentProvider::with_seed(11);
        let suggestion = provider.word(Difficulty::parse_or_default("expert"));
        assert!(words_for(Difficulty::Easy).contains(&suggestion.word.as_str()));
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = StaticContentProvider::with_seed(99);
        let b = StaticContentProvider::with_seed(99);
        for _ in 0..10 {
            assert_eq!(a.word(Difficulty::Hard), b.word(Difficulty::Hard));
        }
    }

    #[tokio::test]
    async fn port_ignores_level_and_history() {
        let provider = StaticContentProvider::with_seed(1);
        let advice = provider
            .learning_advice("dog", &LearnerLevel::default())
            .await;
        assert!(advice.advice.contains("\"dog\""));

        let learned = vec!["cat".to_string(), "dog".to_string()];
        let word = provider.next_word(&learned, Difficulty::Medium).await;
        assert!(words_for(Difficulty::Medium).contains(&word.word.as_str()));
    }

    proptest! {
        #[test]
        fn advice_embeds_any_word(word in "\\PC{1,24}") {
            let provider = StaticContentProvider::with_seed(5);
            let result = provider.advice(&word);
            let quoted = format!("\"{word}\"");
            prop_assert!(result.advice.contains(&quoted));
        }
    }
}
