//! Static vocabulary and encouragement templates
//!
//! Used whenever no language model is configured or a remote call fails.

use crate::value_objects::Difficulty;

/// Number of encouragement templates
pub const ADVICE_TEMPLATE_COUNT: usize = 4;

/// Render every encouragement template for `word`
pub fn advice_templates(word: &str) -> [String; ADVICE_TEMPLATE_COUNT] {
    [
        format!("Great job learning \"{word}\"! 🎉"),
        format!("You're doing amazing with \"{word}\"! Keep it up! 💪"),
        format!("Wonderful! \"{word}\" is now in your vocabulary! 🌟"),
        format!("Fantastic! You've mastered \"{word}\"! 🎊"),
    ]
}

const EASY_WORDS: &[&str] = &[
    "cat", "dog", "ball", "sun", "tree", "book", "apple", "star", "fish", "bird",
];

const MEDIUM_WORDS: &[&str] = &[
    "elephant",
    "butterfly",
    "rainbow",
    "ocean",
    "mountain",
    "garden",
    "flower",
    "rabbit",
];

const HARD_WORDS: &[&str] = &[
    "adventure",
    "wonderful",
    "beautiful",
    "fantastic",
    "magnificent",
    "incredible",
];

/// Fixed word list for a difficulty tier
#[must_use]
pub const fn words_for(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => EASY_WORDS,
        Difficulty::Medium => MEDIUM_WORDS,
        Difficulty::Hard => HARD_WORDS,
    }
}
