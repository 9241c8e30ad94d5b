//! Minimax speech-to-text provider
//!
//! Forwards recorded audio as a multipart upload to
//! `{base_url}/speech_to_text?GroupId=...` and normalizes the reply.

use std::time::Duration;

use async_trait::async_trait;
use domain::DEFAULT_TRANSCRIPTION_CONFIDENCE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::MinimaxConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{AudioData, Transcription, UPLOAD_FILE_NAME, UPLOAD_MIME_TYPE};

const GENERIC_UPSTREAM_ERROR: &str = "Minimax API error";
const GENERIC_RECOGNITION_ERROR: &str = "Recognition failed";

/// Minimax transcription client
#[derive(Debug, Clone)]
pub struct MinimaxSpeechProvider {
    client: Client,
    config: MinimaxConfig,
}

impl MinimaxSpeechProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the key or group id is missing.
    pub fn new(config: MinimaxConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn stt_url(&self) -> String {
        format!(
            "{}/speech_to_text",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn send(
        &self,
        audio: AudioData,
        language: Option<&str>,
    ) -> Result<Transcription, SpeechError> {
        let file_part = Part::bytes(audio.into_data().to_vec())
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(UPLOAD_MIME_TYPE)
            .map_err(|e| SpeechError::RequestFailed(format!("Invalid MIME type: {e}")))?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone());
        if let Some(language) = language {
            form = form.text("language", language.to_string());
        }

        let response = self
            .client
            .post(self.stt_url())
            .query(&[("GroupId", self.config.group_id_str().unwrap_or_default())])
            .bearer_auth(self.config.api_key_str().unwrap_or_default())
            .multipart(form)
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_error_message(status, &body);
            warn!(status = status.as_u16(), error = %message, "Minimax request failed");
            return Err(SpeechError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let result: SttResponse = response.json().await.map_err(|e| {
            SpeechError::InvalidResponse(format!("Failed to parse Minimax response: {e}"))
        })?;

        result.into_transcription()
    }
}

/// Status block carried by every Minimax reply
#[derive(Debug, Default, Deserialize)]
struct BaseResp {
    #[serde(default)]
    status_code: Option<i64>,
    #[serde(default)]
    status_msg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SttResponse {
    #[serde(default)]
    base_resp: Option<BaseResp>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    audio_length: Option<f64>,
}

impl SttResponse {
    fn into_transcription(self) -> Result<Transcription, SpeechError> {
        let base = self.base_resp.unwrap_or_default();
        let text = self.text.filter(|t| !t.is_empty());

        match (base.status_code, text) {
            (Some(0), Some(text)) => {
                let mut transcription =
                    Transcription::new(text).with_confidence(DEFAULT_TRANSCRIPTION_CONFIDENCE);
                if let Some(language) = self.language.filter(|l| !l.is_empty()) {
                    transcription = transcription.with_language(language);
                }
                if let Some(duration) = self.audio_length {
                    transcription = transcription.with_duration(duration);
                }
                debug!(text_len = transcription.text.len(), "Transcription complete");
                Ok(transcription)
            },
            _ => {
                let message = base
                    .status_msg
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_RECOGNITION_ERROR.to_string());
                warn!(status_code = ?base.status_code, error = %message, "Minimax recognition failed");
                Err(SpeechError::TranscriptionFailed(message))
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    base_resp: Option<BaseResp>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// Pick the most specific message from a failed upstream reply
fn upstream_error_message(status: StatusCode, body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return status
            .canonical_reason()
            .unwrap_or(GENERIC_UPSTREAM_ERROR)
            .to_string();
    };

    parsed
        .base_resp
        .and_then(|b| b.status_msg)
        .filter(|m| !m.is_empty())
        .or_else(|| match parsed.error {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| GENERIC_UPSTREAM_ERROR.to_string())
}

#[async_trait]
impl SpeechToText for MinimaxSpeechProvider {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes()))]
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError> {
        debug!("Transcribing audio with Minimax");
        self.send(audio, None).await
    }

    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes()))]
    async fn transcribe_with_language(
        &self,
        audio: AudioData,
        language: &str,
    ) -> Result<Transcription, SpeechError> {
        debug!("Transcribing audio with Minimax");
        self.send(audio, Some(language)).await
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
