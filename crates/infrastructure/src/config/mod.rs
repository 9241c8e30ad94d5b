//! Application configuration
//!
//! Split into focused sections:
//! - `server`: HTTP server and logging settings
//! - `completion`: language-model endpoint for learning content
//! - `transcription`: Minimax speech-to-text upstream
//! - `speech`: client-side capture and output settings

mod server;

use ai_core::CompletionConfig;
use ai_speech::{MinimaxConfig, SpeechConfig};
use application::ports::SecretStorePort;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use server::ServerConfig;

/// Environment variable holding the Minimax bearer token
pub const MINIMAX_API_KEY: &str = "MINIMAX_API_KEY";

/// Environment variable holding the Minimax group id
pub const MINIMAX_GROUP_ID: &str = "MINIMAX_GROUP_ID";

/// Environment variable holding the completion API key
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Prefix for configuration overrides from the environment
pub const ENV_PREFIX: &str = "VOCAB";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion configuration (learning content)
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Upstream transcription configuration
    #[serde(default)]
    pub transcription: MinimaxConfig,

    /// Speech capture/output configuration
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, lowest precedence first: built-in defaults, `config.toml`
    /// in the working directory, then `VOCAB_<SECTION>__<KEY>` variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration using `file` (without extension) as the optional file source
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        // Missing keys fall back to the serde defaults, same as `AppConfig::default()`
        let builder = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            // Override with environment variables (e.g., VOCAB_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Fill empty credentials from a secret store
    ///
    /// Values already present in the file or environment overrides win.
    pub async fn resolve_secrets(&mut self, store: &dyn SecretStorePort) {
        info!("Resolving secrets from secret store");

        if self.transcription.api_key_str().is_none() {
            if let Some(key) = lookup(store, MINIMAX_API_KEY).await {
                self.transcription.api_key = Some(SecretString::from(key));
                debug!("Loaded transcription.api_key from secret store");
            }
        }

        if self.transcription.group_id_str().is_none() {
            if let Some(group_id) = lookup(store, MINIMAX_GROUP_ID).await {
                self.transcription.group_id = Some(group_id);
                debug!("Loaded transcription.group_id from secret store");
            }
        }

        if !self.completion.is_configured() {
            if let Some(key) = lookup(store, OPENAI_API_KEY).await {
                self.completion.api_key = Some(SecretString::from(key));
                debug!("Loaded completion.api_key from secret store");
            }
        }

        if !self.transcription.has_credentials() {
            warn!("Transcription secrets missing, the proxy will answer with a configuration error");
        }
    }
}

async fn lookup(store: &dyn SecretStorePort, key: &str) -> Option<String> {
    match store.exists(key).await {
        Ok(true) => {},
        Ok(false) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to query secret store");
            return None;
        },
    }

    match store.get_secret(key).await {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => None,
        Err(e) => {
            warn!(key, error = %e, "Failed to resolve secret");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use application::error::ApplicationError;
    use async_trait::async_trait;

    use super::*;

    struct MapSecretStore(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl SecretStorePort for MapSecretStore {
        async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
            self.0
                .get(key)
                .map(|v| (*v).to_string())
                .ok_or_else(|| ApplicationError::NotFound(key.to_string()))
        }

        async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
            Ok(self.0.contains_key(key))
        }
    }

    #[test]
    fn default_config_has_expected_sections() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, "text");
        assert_eq!(config.server.max_body_size_audio_bytes, 10 * 1024 * 1024);
        assert!(!config.completion.is_configured());
        assert!(!config.transcription.has_credentials());
        assert_eq!(config.speech.default_lang, "en-US");
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            [server]
            port = 8080
            log_format = "json"
            allowed_origins = ["http://localhost:5173"]

            [completion]
            model = "gpt-4o-mini"

            [transcription]
            group_id = "group-7"

            [speech]
            listen_timeout_ms = 10000
        "#;

        let config: AppConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(config.server.json_logs());
        assert_eq!(config.server.allowed_origins.len(), 1);
        assert_eq!(config.completion.model, "gpt-4o-mini");
        assert_eq!(config.transcription.group_id.as_deref(), Some("group-7"));
        assert_eq!(config.transcription.model, "speech-01");
        assert_eq!(config.speech.listen_timeout_ms, 10000);
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let config = AppConfig::load_from("definitely-missing-config-file").unwrap();
        let defaults = AppConfig::default();
        assert_eq!(config.server.host, defaults.server.host);
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.server.shutdown_timeout_secs, defaults.server.shutdown_timeout_secs);
        assert_eq!(config.transcription.base_url, "https://api.minimax.chat/v1");
    }

    #[tokio::test]
    async fn resolve_secrets_fills_missing_credentials() {
        let store = MapSecretStore(HashMap::from([
            (MINIMAX_API_KEY, "mm-secret"),
            (MINIMAX_GROUP_ID, "group-1"),
            (OPENAI_API_KEY, "sk-live"),
        ]));
        let mut config = AppConfig::default();

        config.resolve_secrets(&store).await;

        assert_eq!(config.transcription.api_key_str(), Some("mm-secret"));
        assert_eq!(config.transcription.group_id_str(), Some("group-1"));
        assert!(config.completion.is_configured());
        assert_eq!(config.completion.api_key_str(), Some("sk-live"));
    }

    #[test]
    fn debug_and_serialization_hide_completion_key() {
        let mut config = AppConfig::default();
        config.completion.api_key = Some(SecretString::from("sk-live-SECRET"));

        assert!(!format!("{config:?}").contains("sk-live-SECRET"));
        let serialized = toml::to_string(&config).unwrap();
        assert!(!serialized.contains("sk-live-SECRET"));
    }

    #[tokio::test]
    async fn resolve_secrets_keeps_existing_values() {
        let store = MapSecretStore(HashMap::from([(MINIMAX_GROUP_ID, "from-env")]));
        let mut config = AppConfig::default();
        config.transcription.group_id = Some("from-file".to_string());

        config.resolve_secrets(&store).await;

        assert_eq!(config.transcription.group_id_str(), Some("from-file"));
        assert!(config.transcription.api_key.is_none());
    }

    #[tokio::test]
    async fn blank_secrets_are_ignored() {
        let store = MapSecretStore(HashMap::from([(MINIMAX_API_KEY, "  ")]));
        let mut config = AppConfig::default();

        config.resolve_secrets(&store).await;

        assert!(config.transcription.api_key.is_none());
    }
}
