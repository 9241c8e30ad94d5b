//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod completion_adapter;
mod env_secret_store;
mod speech_adapter;

pub use completion_adapter::CompletionAdapter;
pub use env_secret_store::EnvSecretStore;
pub use speech_adapter::{RecognitionAdapter, SynthesisAdapter, map_speech_error};
