//! Voice table
//!
//! Fixed mapping from human-readable voice names to ElevenLabs voice ids.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Voice;
//!
//! let voice: Voice = "bella".parse().expect("known voice");
//! assert_eq!(voice.id(), "EXAVITQu4vr4xnSDxMaL");
//! assert_eq!(Voice::default(), Voice::Rachel);
//! ```

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::DomainError;

/// A selectable synthesis voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Voice {
    #[default]
    Rachel,
    Bella,
    Antoni,
    Daniel,
}

impl Voice {
    /// Every voice, in display order
    pub const ALL: [Self; 4] = [Self::Rachel, Self::Bella, Self::Antoni, Self::Daniel];

    /// Provider voice id
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Rachel => "21m00Tcm4TlvDq8ikWAM",
            Self::Bella => "EXAVITQu4vr4xnSDxMaL",
            Self::Antoni => "AZnzlk1XvdvUeBnXmlld",
            Self::Daniel => "IKne3meq5aSn9XLyUdCD",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rachel => "Rachel",
            Self::Bella => "Bella",
            Self::Antoni => "Antoni",
            Self::Daniel => "Daniel",
        }
    }
}

impl FromStr for Voice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|voice| voice.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownVoice(wanted.to_string()))
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
