//! Single-shot speech capture over a native recognizer

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use domain::RecognitionResult;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::error::SpeechError;
use crate::ports::RecognitionEngine;
use crate::types::{RecognitionEvent, RecognitionSettings};

const NO_SESSION: u64 = 0;

/// Drives one capture session at a time and settles it exactly once
pub struct SpeechCaptureAdapter {
    engine: Option<Arc<dyn RecognitionEngine>>,
    settings: RecognitionSettings,
    listen_timeout: Option<Duration>,
    /// Id of the active session, `NO_SESSION` when idle
    active_session: AtomicU64,
    next_session: AtomicU64,
}

impl fmt::Debug for SpeechCaptureAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechCaptureAdapter")
            .field("supported", &self.engine.is_some())
            .field("settings", &self.settings)
            .field("listen_timeout", &self.listen_timeout)
            .field("listening", &self.is_listening())
            .finish_non_exhaustive()
    }
}

/// Clears the session slot when a capture future settles or is dropped
struct SessionGuard<'a> {
    slot: &'a AtomicU64,
    id: u64,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        // A later session may already own the slot after stop_listening
        let _ = self
            .slot
            .compare_exchange(self.id, NO_SESSION, Ordering::AcqRel, Ordering::Acquire);
    }
}

impl SpeechCaptureAdapter {
    /// Create an adapter; `None` means the platform has no recognizer
    #[must_use]
    pub fn new(engine: Option<Arc<dyn RecognitionEngine>>) -> Self {
        Self {
            engine,
            settings: RecognitionSettings::default(),
            listen_timeout: None,
            active_session: AtomicU64::new(NO_SESSION),
            next_session: AtomicU64::new(1),
        }
    }

    /// Bound each session by `timeout`
    #[must_use]
    pub const fn with_listen_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.listen_timeout = timeout;
        self
    }

    /// Whether a recognizer is present
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.engine.is_some()
    }

    /// Whether a session is in progress
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.active_session.load(Ordering::Acquire) != NO_SESSION
    }

    /// Listen for one utterance
    ///
    /// Resolves with the first final result, or fails on the first error,
    /// on end-of-session without a result, or when the listen timeout elapses.
    #[instrument(skip(self))]
    pub async fn start_listening(&self) -> Result<RecognitionResult, SpeechError> {
        let engine = self
            .engine
            .as_ref()
            .ok_or_else(|| SpeechError::NotAvailable("speech recognition".to_string()))?;

        let id = self.next_session.fetch_add(1, Ordering::Relaxed);
        self.active_session
            .compare_exchange(NO_SESSION, id, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SpeechError::AlreadyListening)?;
        let _guard = SessionGuard {
            slot: &self.active_session,
            id,
        };

        let (tx, mut rx) = mpsc::unbounded_channel();
        engine.start(&self.settings, tx)?;
        info!(session = id, lang = %self.settings.lang, "Listening started");

        let outcome = match self.listen_timeout {
            Some(limit) => {
                if let Ok(outcome) = tokio::time::timeout(limit, first_outcome(&mut rx)).await {
                    outcome
                } else {
                    let timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
                    warn!(session = id, timeout_ms, "Listening timed out");
                    engine.stop();
                    Err(SpeechError::Timeout(timeout_ms))
                }
            },
            None => first_outcome(&mut rx).await,
        };

        match &outcome {
            Ok(result) => info!(
                session = id,
                text = %result.text,
                confidence = result.confidence,
                "Speech recognized"
            ),
            Err(e) => debug!(session = id, error = %e, "Listening finished without result"),
        }

        outcome
    }

    /// Abort the active session; no-op when idle
    #[instrument(skip(self))]
    pub fn stop_listening(&self) {
        let previous = self.active_session.swap(NO_SESSION, Ordering::AcqRel);
        if previous == NO_SESSION {
            return;
        }

        if let Some(engine) = &self.engine {
            engine.stop();
        }
        info!(session = previous, "Listening stopped");
    }
}

/// First terminal event wins; later events are never read
async fn first_outcome(
    rx: &mut mpsc::UnboundedReceiver<RecognitionEvent>,
) -> Result<RecognitionResult, SpeechError> {
    match rx.recv().await {
        Some(RecognitionEvent::Result {
            transcript,
            confidence,
        }) => RecognitionResult::new(transcript, confidence)
            .map_err(|e| SpeechError::InvalidResponse(e.to_string())),
        Some(RecognitionEvent::Error(code)) => Err(SpeechError::Recognition(code)),
        Some(RecognitionEvent::End) | None => Err(SpeechError::NoSpeech),
    }
}
