//! Configuration for speech synthesis

use domain::Voice;
use serde::{Deserialize, Serialize};

/// Configuration for the ElevenLabs text-to-speech service
#[derive(Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// ElevenLabs API key, sent as `xi-api-key`
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Voice id used when the caller does not pass one
    #[serde(default = "default_voice_id")]
    pub default_voice_id: String,

    /// Request timeout in seconds; unset leaves the HTTP client default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_voice_id() -> String {
    Voice::default().id().to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_voice_id: default_voice_id(),
            timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("default_voice_id", &self.default_voice_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SpeechConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    /// Whether a usable API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.has_api_key() {
            return Err("ElevenLabs API key is required".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "Base URL must start with http:// or https://, got {}",
                self.base_url
            ));
        }

        if self.default_voice_id.trim().is_empty() {
            return Err("Default voice id must not be empty".to_string());
        }

        if self.timeout_secs == Some(0) {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
