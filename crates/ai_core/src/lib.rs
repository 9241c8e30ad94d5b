//! AI Core - Chat-completion client
//!
//! Provides a port for chat-completion engines and an adapter for
//! OpenAI-compatible `/chat/completions` endpoints.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::{CompletionConfig, PLACEHOLDER_API_KEY};
pub use error::CompletionError;
pub use openai::OpenAiCompletionClient;
pub use ports::{CompletionEngine, CompletionMessage, CompletionRequest, CompletionResponse};
