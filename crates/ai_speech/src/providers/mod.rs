//! Speech-to-text provider implementations

pub mod minimax;

pub use minimax::MinimaxSpeechProvider;
