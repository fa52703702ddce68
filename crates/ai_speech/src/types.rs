//! Speech data types

use serde::{Deserialize, Serialize};

/// Synthesized audio with its content type
#[derive(Clone, PartialEq, Eq)]
pub struct AudioData {
    data: Vec<u8>,
    content_type: String,
}

impl AudioData {
    /// Create audio from raw bytes
    #[must_use]
    pub fn new(data: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            data,
            content_type: content_type.into(),
        }
    }

    /// Raw audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// MIME type reported by the provider
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl std::fmt::Debug for AudioData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioData")
            .field("size_bytes", &self.data.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// ElevenLabs voice settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl VoiceSettings {
    /// Settings used for every synthesis request
    pub const FIXED: Self = Self {
        stability: 0.75,
        similarity_boost: 0.85,
    };
}
