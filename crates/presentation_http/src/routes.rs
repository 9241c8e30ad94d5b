//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{any, get},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let audio_limit = DefaultBodyLimit::max(state.max_audio_bytes);

    Router::new()
        // Health
        .route("/health", get(handlers::health::health_check))
        // Transcription proxy; the handler answers 405 for non-POST itself
        .route(
            "/api/whisper",
            any(handlers::transcribe::transcribe).layer(audio_limit),
        )
        // Attach state
        .with_state(state)
}
