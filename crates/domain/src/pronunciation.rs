//! Pronunciation scoring
//!
//! Compares what the recognizer heard with the word the learner was asked
//! to say. Matching is case- and whitespace-insensitive; the score of a
//! match is the recognizer confidence as a percentage, sorted into three
//! feedback bands. A mismatch always scores [`MISMATCH_SCORE`].

use serde::{Deserialize, Serialize};

/// Lowest score that earns the "perfect" feedback
pub const PERFECT_THRESHOLD: u8 = 90;

/// Lowest score that earns the "good" feedback
pub const GOOD_THRESHOLD: u8 = 70;

/// Fixed score for a wrong word
pub const MISMATCH_SCORE: u8 = 30;

const PERFECT_FEEDBACK: &str = "🌟 Perfect! Great pronunciation!";
const GOOD_FEEDBACK: &str = "👍 Good job! Keep practicing!";
const NICE_TRY_FEEDBACK: &str = "💪 Nice try! Let's practice more!";

/// Outcome of comparing a recognized utterance with the target word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationEvaluation {
    /// Score between 0 and 100
    pub score: u8,
    /// Feedback shown to the learner
    pub feedback: String,
    /// Whether the recognized text matched the target word
    pub is_correct: bool,
}

/// Score a recognized utterance against the target word
pub fn evaluate_pronunciation(
    recognized_text: &str,
    target_word: &str,
    confidence: f32,
) -> PronunciationEvaluation {
    let heard = normalize(recognized_text);
    let expected = normalize(target_word);

    if heard != expected {
        return PronunciationEvaluation {
            score: MISMATCH_SCORE,
            feedback: format!(
                "🎯 Try again! You said \"{recognized_text}\", but the word is \"{target_word}\"."
            ),
            is_correct: false,
        };
    }

    let score = confidence_to_score(confidence);
    let feedback = if score >= PERFECT_THRESHOLD {
        PERFECT_FEEDBACK
    } else if score >= GOOD_THRESHOLD {
        GOOD_FEEDBACK
    } else {
        NICE_TRY_FEEDBACK
    };

    PronunciationEvaluation {
        score,
        feedback: feedback.to_string(),
        is_correct: true,
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn confidence_to_score(confidence: f32) -> u8 {
    if confidence.is_nan() {
        return 0;
    }
    let percent = (f64::from(confidence) * 100.0).round().clamp(0.0, 100.0);
    percent as u8
}
