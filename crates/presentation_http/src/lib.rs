//! Vocabulary coach HTTP presentation layer
//!
//! Serves the transcription proxy and a health endpoint.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::RequestIdLayer;
pub use routes::create_router;
pub use state::AppState;
