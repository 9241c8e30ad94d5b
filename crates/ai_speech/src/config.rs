//! Configuration for speech capture and upstream transcription

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Message reported when the transcription secrets are missing
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Minimax API key or Group ID not configured";

/// Configuration for the client-side speech adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Upper bound on a single capture session, in milliseconds (0 = wait for the engine)
    #[serde(default)]
    pub listen_timeout_ms: u64,

    /// Language tag used when the caller does not pass one to `speak`
    #[serde(default = "default_lang")]
    pub default_lang: String,
}

fn default_lang() -> String {
    "en-US".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            listen_timeout_ms: 0,
            default_lang: default_lang(),
        }
    }
}

impl SpeechConfig {
    /// Listen timeout, if one is configured
    #[must_use]
    pub fn listen_timeout(&self) -> Option<std::time::Duration> {
        (self.listen_timeout_ms > 0).then(|| std::time::Duration::from_millis(self.listen_timeout_ms))
    }
}

/// Minimax speech-to-text configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Bearer token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Account group identifier sent as the `GroupId` query parameter
    #[serde(default)]
    pub group_id: Option<String>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Recognition model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl std::fmt::Debug for MinimaxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinimaxConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("group_id", &self.group_id)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.minimax.chat/v1".to_string()
}

fn default_model() -> String {
    "speech-01".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            group_id: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl MinimaxConfig {
    /// Get the API key as a string reference (for API calls)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Get the group id, ignoring blank values
    #[must_use]
    pub fn group_id_str(&self) -> Option<&str> {
        self.group_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Both secrets are present
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_key_str().is_some() && self.group_id_str().is_some()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.has_credentials() {
            return Err(MISSING_CREDENTIALS_MESSAGE.to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
