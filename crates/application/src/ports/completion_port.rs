//! Completion port - Interface for short language-model completions

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Sampling options for a single completion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl CompletionOptions {
    /// Create options
    #[must_use]
    pub const fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

/// Port for language-model completions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Complete `prompt` under `system_prompt`, returning the first choice's text
    async fn complete(
        &self,
        system_prompt: &str,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<String, ApplicationError>;

    /// Name of the model answering requests
    fn model_name(&self) -> String;
}
