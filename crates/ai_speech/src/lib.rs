//! AI Speech - speech capture, speech output and upstream transcription
//!
//! Provides:
//! - `SpeechCaptureAdapter` - one-shot listening over a native recognizer
//! - `SpeechOutputAdapter` - speaking words through a native synthesizer
//! - `SpeechToText` - transcribing uploaded audio through a remote service
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the engine and service traits (ports)
//! - `recognition` and `synthesis` drive the native engines
//! - `providers` module contains concrete remote implementations (adapters)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{MinimaxSpeechProvider, SpeechToText, AudioData};
//!
//! let provider = MinimaxSpeechProvider::new(config)?;
//! let audio = AudioData::new(bytes);
//! let transcription = provider.transcribe_with_language(audio, "en").await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod recognition;
pub mod synthesis;
pub mod types;

pub use config::{MISSING_CREDENTIALS_MESSAGE, MinimaxConfig, SpeechConfig};
pub use error::SpeechError;
pub use ports::{RecognitionEngine, SpeechToText, SynthesisEngine};
pub use providers::MinimaxSpeechProvider;
pub use recognition::SpeechCaptureAdapter;
pub use synthesis::{DEFAULT_SPEECH_LANG, SPEECH_PITCH, SPEECH_RATE, SpeechOutputAdapter};
pub use types::{
    AudioData, RecognitionEvent, RecognitionSettings, Transcription, Utterance,
    VoiceInfo,
};
