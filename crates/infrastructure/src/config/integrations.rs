//! Provider sections of the application configuration

use ai_core::InferenceConfig;
use ai_speech::SpeechConfig;
use domain::{DomainError, Voice};
use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

fn expose(secret: Option<&SecretString>) -> Option<&str> {
    secret
        .map(|key| key.expose_secret())
        .filter(|key| !key.trim().is_empty())
}

// ==============================
// Weather Configuration
// ==============================

/// OpenWeatherMap configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_weather_base_url() -> String {
    WeatherConfig::default().base_url
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl WeatherAppConfig {
    /// Get the API key, if a non-blank one is set
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        expose(self.api_key.as_ref())
    }

    /// Convert to `integration_weather`'s `WeatherConfig`
    #[must_use]
    pub fn to_weather_config(&self) -> WeatherConfig {
        WeatherConfig {
            api_key: self.api_key_str().unwrap_or_default().to_string(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Inference Configuration
// ==============================

/// Gemini configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct InferenceAppConfig {
    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    #[serde(default = "default_inference_base_url")]
    pub base_url: String,

    #[serde(default = "default_inference_model")]
    pub default_model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

fn default_inference_base_url() -> String {
    InferenceConfig::default().base_url
}

fn default_inference_model() -> String {
    InferenceConfig::default().default_model
}

impl Default for InferenceAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_inference_base_url(),
            default_model: default_inference_model(),
            timeout_secs: None,
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl std::fmt::Debug for InferenceAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceAppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

impl InferenceAppConfig {
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        expose(self.api_key.as_ref())
    }

    /// Convert to `ai_core`'s `InferenceConfig`
    #[must_use]
    pub fn to_inference_config(&self) -> InferenceConfig {
        InferenceConfig {
            api_key: self.api_key_str().unwrap_or_default().to_string(),
            base_url: self.base_url.clone(),
            default_model: self.default_model.clone(),
            timeout_secs: self.timeout_secs,
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

// ==============================
// Speech Configuration
// ==============================

/// ElevenLabs configuration
///
/// Without an API key speech synthesis is disabled.
#[derive(Clone, Serialize, Deserialize)]
pub struct SpeechAppConfig {
    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    #[serde(default = "default_speech_base_url")]
    pub base_url: String,

    /// Voice name from the voice table
    #[serde(default = "default_voice_name")]
    pub default_voice: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_speech_base_url() -> String {
    SpeechConfig::default().base_url
}

fn default_voice_name() -> String {
    Voice::default().name().to_string()
}

impl Default for SpeechAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_speech_base_url(),
            default_voice: default_voice_name(),
            timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for SpeechAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("default_voice", &self.default_voice)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SpeechAppConfig {
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        expose(self.api_key.as_ref())
    }

    /// Whether speech synthesis can be enabled
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key_str().is_some()
    }

    /// The configured default voice
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownVoice` if the name is not in the voice table.
    pub fn voice(&self) -> Result<Voice, DomainError> {
        self.default_voice.parse()
    }

    /// Convert to `ai_speech`'s `SpeechConfig`
    #[must_use]
    pub fn to_speech_config(&self) -> SpeechConfig {
        SpeechConfig {
            api_key: self.api_key_str().map(str::to_string),
            base_url: self.base_url.clone(),
            default_voice_id: self.voice().unwrap_or_default().id().to_string(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> Option<SecretString> {
        Some(SecretString::from(value.to_string()))
    }

    #[test]
    fn weather_defaults() {
        let config = WeatherAppConfig::default();
        assert_eq!(config.base_url, "http://api.openweathermap.org/data/2.5");
        assert!(config.api_key_str().is_none());
    }

    #[test]
    fn weather_conversion_exposes_key() {
        let config = WeatherAppConfig {
            api_key: secret("owm-key"),
            timeout_secs: Some(10),
            ..Default::default()
        };
        let converted = config.to_weather_config();
        assert_eq!(converted.api_key, "owm-key");
        assert_eq!(converted.timeout_secs, Some(10));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = InferenceAppConfig {
            api_key: secret("   "),
            ..Default::default()
        };
        assert!(config.api_key_str().is_none());
    }

    #[test]
    fn inference_conversion() {
        let config = InferenceAppConfig {
            api_key: secret("gem-key"),
            default_model: "gemini-1.5-pro".to_string(),
            temperature: Some(0.2),
            ..Default::default()
        };
        let converted = config.to_inference_config();
        assert_eq!(converted.api_key, "gem-key");
        assert_eq!(converted.default_model, "gemini-1.5-pro");
        assert_eq!(converted.temperature, Some(0.2));
        assert_eq!(
            converted.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn speech_without_key_is_disabled() {
        assert!(!SpeechAppConfig::default().has_api_key());
    }

    #[test]
    fn speech_voice_resolves_to_id() {
        let config = SpeechAppConfig {
            api_key: secret("xi-key"),
            default_voice: "daniel".to_string(),
            ..Default::default()
        };
        assert_eq!(config.voice().unwrap(), Voice::Daniel);
        assert_eq!(config.to_speech_config().default_voice_id, Voice::Daniel.id());
        assert_eq!(config.to_speech_config().api_key.as_deref(), Some("xi-key"));
    }

    #[test]
    fn unknown_voice_is_rejected() {
        let config = SpeechAppConfig {
            default_voice: "Zeus".to_string(),
            ..Default::default()
        };
        assert!(config.voice().is_err());
    }

    #[test]
    fn debug_redacts_keys() {
        let debug = format!(
            "{:?} {:?} {:?}",
            WeatherAppConfig {
                api_key: secret("owm-secret"),
                ..Default::default()
            },
            InferenceAppConfig {
                api_key: secret("gem-secret"),
                ..Default::default()
            },
            SpeechAppConfig {
                api_key: secret("xi-secret"),
                ..Default::default()
            }
        );
        assert!(!debug.contains("owm-secret"));
        assert!(!debug.contains("gem-secret"));
        assert!(!debug.contains("xi-secret"));
        assert_eq!(debug.matches("[REDACTED]").count(), 3);
    }
}
