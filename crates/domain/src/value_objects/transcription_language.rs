//! Transcription language hint

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language hint accepted by the upstream transcription service
///
/// Only English and Chinese are supported; any other requested value
/// collapses to Chinese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionLanguage {
    /// English
    En,
    /// Chinese
    Zh,
}

impl TranscriptionLanguage {
    /// Normalize a raw query value
    #[must_use]
    pub fn from_query(value: &str) -> Self {
        if value == "en" { Self::En } else { Self::Zh }
    }

    /// ISO 639-1 code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }
}

impl fmt::Display for TranscriptionLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_stays_english() {
        assert_eq!(TranscriptionLanguage::from_query("en"), TranscriptionLanguage::En);
    }

    #[test]
    fn anything_else_becomes_chinese() {
        for raw in ["zh", "de", "EN", "en-US", ""] {
            assert_eq!(TranscriptionLanguage::from_query(raw), TranscriptionLanguage::Zh);
        }
    }

    #[test]
    fn code_matches_display() {
        assert_eq!(TranscriptionLanguage::Zh.code(), "zh");
        assert_eq!(TranscriptionLanguage::En.to_string(), "en");
    }
}
