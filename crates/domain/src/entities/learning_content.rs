//! Encouragement and word suggestions shown to the learner

use serde::{Deserialize, Serialize};

/// Encouragement text for a freshly learned word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResult {
    pub success: bool,
    pub advice: String,
}

impl AdviceResult {
    /// Successful advice with the given text
    pub fn new(advice: impl Into<String>) -> Self {
        Self {
            success: true,
            advice: advice.into(),
        }
    }
}

/// Next word the learner should practice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSuggestion {
    pub success: bool,
    pub word: String,
}

impl WordSuggestion {
    /// Successful suggestion with the given word
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            success: true,
            word: word.into(),
        }
    }
}
