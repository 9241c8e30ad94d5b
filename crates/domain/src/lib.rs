//! Domain layer for the vocabulary coach
//!
//! Contains the learning data model, the pronunciation scoring rules and the
//! static vocabulary used when no language model is configured.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod pronunciation;
pub mod value_objects;
pub mod vocabulary;

pub use entities::*;
pub use errors::DomainError;
pub use pronunciation::{PronunciationEvaluation, evaluate_pronunciation};
pub use value_objects::*;
