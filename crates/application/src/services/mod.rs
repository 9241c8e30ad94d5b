//! Application services - Use case implementations

mod fallback_content;
mod learning_assistant;
mod remote_content;

pub use fallback_content::StaticContentProvider;
pub use learning_assistant::LearningAssistant;
pub use remote_content::{RemoteContentProvider, learning_content_strategy};
