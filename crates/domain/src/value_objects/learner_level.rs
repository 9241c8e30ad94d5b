//! Learner level value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported level of the learner (e.g. "beginner")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearnerLevel(String);

impl LearnerLevel {
    /// Create a level from any label; blank labels become the default
    pub fn new(level: impl Into<String>) -> Self {
        let level = level.into();
        if level.trim().is_empty() {
            Self::default()
        } else {
            Self(level)
        }
    }

    /// Borrow the label
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LearnerLevel {
    fn default() -> Self {
        Self("beginner".to_string())
    }
}

impl fmt::Display for LearnerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LearnerLevel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_beginner() {
        assert_eq!(LearnerLevel::default().as_str(), "beginner");
    }

    #[test]
    fn blank_label_uses_default() {
        assert_eq!(LearnerLevel::new("  "), LearnerLevel::default());
    }

    #[test]
    fn keeps_custom_label() {
        assert_eq!(LearnerLevel::from("advanced").to_string(), "advanced");
    }
}
