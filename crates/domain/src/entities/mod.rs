//! Domain entities - Short-lived results produced per request

mod learning_content;
mod recognition;
mod transcription;

pub use learning_content::{AdviceResult, WordSuggestion};
pub use recognition::RecognitionResult;
pub use transcription::{DEFAULT_TRANSCRIPTION_CONFIDENCE, TranscriptionResponse};
