//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod completion_port;
mod learning_content_port;
mod secret_store;
mod speech_capture_port;
mod speech_output_port;

#[cfg(test)]
pub use completion_port::MockCompletionPort;
pub use completion_port::{CompletionOptions, CompletionPort};
#[cfg(test)]
pub use learning_content_port::MockLearningContentPort;
pub use learning_content_port::LearningContentPort;
pub use secret_store::SecretStorePort;
#[cfg(test)]
pub use speech_capture_port::MockSpeechCapturePort;
pub use speech_capture_port::SpeechCapturePort;
#[cfg(test)]
pub use speech_output_port::MockSpeechOutputPort;
pub use speech_output_port::SpeechOutputPort;
