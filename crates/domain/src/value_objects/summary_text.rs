//! Summary and speech text
//!
//! `SpeechText` is the only type the speech synthesizer accepts, and it can
//! only be built by sanitizing some text, so synthesis never sees the
//! characters in [`SpeechText::STRIPPED`].
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{SpeechText, SummaryText};
//!
//! let summary = SummaryText::new("Yes! It's 20°C & sunny *today*.");
//! let speech = SpeechText::sanitize(summary.as_str());
//! assert_eq!(speech.as_str(), "Yes It's 20°C  sunny today.");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Natural-language answer and summary produced for an observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryText(String);

impl SummaryText {
    /// Wrap generated text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text is empty or whitespace only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Consume into the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SummaryText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text prepared for speech synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SpeechText(String);

impl SpeechText {
    /// Characters removed before synthesis
    pub const STRIPPED: [char; 7] = ['!', '@', '#', '$', '%', '&', '*'];

    /// Remove every stripped character, keeping the order of the rest
    #[must_use]
    pub fn sanitize(text: &str) -> Self {
        Self(
            text.chars()
                .filter(|c| !Self::STRIPPED.contains(c))
                .collect(),
        )
    }

    /// Get the text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether there is anything left to speak
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&SummaryText> for SpeechText {
    fn from(summary: &SummaryText) -> Self {
        Self::sanitize(summary.as_str())
    }
}

impl fmt::Display for SpeechText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
