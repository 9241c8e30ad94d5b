//! Port for secret retrieval
//!
//! Backends range from plain environment variables to external secret managers.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for secret storage operations
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve a secret by its key (e.g. "MINIMAX_API_KEY")
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError>;

    /// Check if a secret exists
    async fn exists(&self, key: &str) -> Result<bool, ApplicationError>;
}
