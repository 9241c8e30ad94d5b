//! Value objects - Immutable objects without identity

mod difficulty;
mod learner_level;
mod transcription_language;

pub use difficulty::Difficulty;
pub use learner_level::LearnerLevel;
pub use transcription_language::TranscriptionLanguage;
