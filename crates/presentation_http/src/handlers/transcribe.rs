//! Transcription proxy handler
//!
//! Accepts raw recorded audio and forwards it to the upstream
//! speech-to-text service so the API key never reaches the browser.

use ai_speech::AudioData;
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Query, Request, State},
    http::{Method, StatusCode, Uri},
};
use domain::{TranscriptionLanguage, TranscriptionResponse};
use tracing::{debug, info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Forward uploaded audio to the upstream transcription service
///
/// Checks run in order: method, credentials, body.
#[instrument(skip(state, request))]
pub async fn transcribe(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    if request.method() != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let Some(transcriber) = state.transcriber.clone() else {
        warn!("Transcription requested but credentials are missing");
        return Err(ApiError::missing_credentials());
    };

    let language = requested_language(request.uri());

    let body = Bytes::from_request(request, &state)
        .await
        .map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge(state.max_audio_bytes)
            } else {
                ApiError::Internal(rejection.body_text())
            }
        })?;

    debug!(size_bytes = body.len(), language = ?language, "Forwarding audio");
    let audio = AudioData::new(body);

    let transcription = match language {
        Some(language) => {
            transcriber
                .transcribe_with_language(audio, language.code())
                .await?
        },
        None => transcriber.transcribe(audio).await?,
    };

    let response = transcription.into_response();
    info!(
        language = %response.language,
        duration = response.duration,
        "Transcription completed"
    );

    Ok(Json(response))
}

/// Language hint from the query string
///
/// Absent or empty means none. A repeated `language` parameter is never
/// plain `en`, so it is sent as `zh`.
fn requested_language(uri: &Uri) -> Option<TranscriptionLanguage> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).unwrap_or_else(|e| {
        debug!(error = %e, "Ignoring malformed query string");
        Query(Vec::new())
    });

    let mut values = pairs
        .into_iter()
        .filter_map(|(key, value)| (key == "language").then_some(value));

    match (values.next(), values.next()) {
        (None, _) => None,
        (Some(single), None) if single.is_empty() => None,
        (Some(single), None) => Some(TranscriptionLanguage::from_query(&single)),
        (Some(_), Some(_)) => Some(TranscriptionLanguage::Zh),
    }
}
