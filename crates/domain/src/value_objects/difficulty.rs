//! Word difficulty value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of a vocabulary word
///
/// Each tier maps to a fixed fallback word list. Unknown tier names
/// collapse to [`Difficulty::Easy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Short, concrete words (cat, dog, sun)
    #[default]
    Easy,
    /// Longer everyday words (elephant, rainbow)
    Medium,
    /// Descriptive words (magnificent, incredible)
    Hard,
}

impl Difficulty {
    /// Parse a tier name, falling back to `Easy` for anything unknown
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Easy,
        }
    }

    /// Lowercase tier name as used in prompts and on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// All tiers, easiest first
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Easy, Self::Medium, Self::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
        Self::parse_or_default(value)
    }
}
