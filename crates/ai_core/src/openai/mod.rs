//! OpenAI-compatible completion client

mod client;

pub use client::OpenAiCompletionClient;
