//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the completion
//! client, the speech engines and environment secrets. Also owns
//! configuration loading and logging setup.

pub mod adapters;
pub mod assistant;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use assistant::{SpeechEngines, build_learning_assistant};
pub use config::{AppConfig, ServerConfig};
pub use telemetry::{TelemetryError, init_logging};
