//! Secrets injected as environment variables
//!
//! Keys are the variable names themselves (`MINIMAX_API_KEY`,
//! `MINIMAX_GROUP_ID`, `OPENAI_API_KEY`).

use std::env;

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// [`SecretStorePort`] over the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretStore;

impl EnvSecretStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretStorePort for EnvSecretStore {
    #[instrument(skip(self))]
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
        match env::var(key) {
            Ok(value) => {
                debug!("Secret read from environment");
                Ok(value)
            },
            Err(env::VarError::NotPresent) => {
                Err(ApplicationError::NotFound(format!("Secret not set: {key}")))
            },
            Err(env::VarError::NotUnicode(_)) => Err(ApplicationError::Configuration(format!(
                "Secret contains invalid UTF-8: {key}"
            ))),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
        Ok(env::var_os(key).is_some())
    }
}
