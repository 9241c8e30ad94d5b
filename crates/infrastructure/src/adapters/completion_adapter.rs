//! Completion adapter - Implements CompletionPort using ai_core

use ai_core::{
    CompletionConfig, CompletionEngine, CompletionError, CompletionRequest, OpenAiCompletionClient,
};
use application::{
    error::ApplicationError,
    ports::{CompletionOptions, CompletionPort},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for OpenAI-compatible chat completion endpoints
#[derive(Debug)]
pub struct CompletionAdapter {
    client: OpenAiCompletionClient,
}

impl CompletionAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: CompletionConfig) -> Result<Self, ApplicationError> {
        let client = OpenAiCompletionClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Create an adapter only when a usable API key is configured
    pub fn from_config(config: &CompletionConfig) -> Result<Option<Self>, ApplicationError> {
        if !config.is_configured() {
            debug!("Completion API key not configured");
            return Ok(None);
        }
        Self::new(config.clone()).map(Some)
    }

    /// Convert ai_core error to application error
    fn map_error(e: CompletionError) -> ApplicationError {
        match e {
            CompletionError::RateLimited => ApplicationError::RateLimited,
            CompletionError::NotConfigured(msg) => ApplicationError::Configuration(msg),
            CompletionError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Completion connection failed: {msg}"))
            },
            CompletionError::Timeout(ms) => ApplicationError::Timeout(ms),
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl CompletionPort for CompletionAdapter {
    #[instrument(skip(self, system_prompt, prompt), fields(prompt_len = prompt.len()))]
    async fn complete(
        &self,
        system_prompt: &str,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<String, ApplicationError> {
        let request = CompletionRequest::with_system(system_prompt, prompt)
            .with_max_tokens(options.max_tokens)
            .with_temperature(options.temperature);

        let response = self.client.complete(request).await.map_err(Self::map_error)?;
        debug!(model = %response.model, "Completion received");
        Ok(response.content)
    }

    fn model_name(&self) -> String {
        self.client.model_name().to_string()
    }
}
