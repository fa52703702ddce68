//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file, then `WEATHER_ASSISTANT_*` environment variables (`__` nests,
//! e.g. `WEATHER_ASSISTANT_WEATHER__API_KEY`). The plain `weather_api`,
//! `gemini_api` and `elevenlabs_api` variables fill credentials that are
//! still unset after layering.

mod integrations;

use std::path::Path;

use integration_weather::GeolocationConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use integrations::{InferenceAppConfig, SpeechAppConfig, WeatherAppConfig};

use crate::telemetry::LoggingConfig;

const ENV_PREFIX: &str = "WEATHER_ASSISTANT";

const LEGACY_WEATHER_KEY: &str = "weather_api";
const LEGACY_INFERENCE_KEY: &str = "gemini_api";
const LEGACY_SPEECH_KEY: &str = "elevenlabs_api";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were loaded but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeatherMap configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Gemini configuration
    #[serde(default)]
    pub inference: InferenceAppConfig,

    /// ElevenLabs configuration (speech is disabled without a key)
    #[serde(default)]
    pub speech: SpeechAppConfig,

    /// IP geolocation configuration
    #[serde(default)]
    pub geolocation: GeolocationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Without `path`, a `config.toml` in the working directory is used when
    /// present. With `path`, the file must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, None)
    }

    /// Load using `vars` in place of the process environment
    fn load_from(
        path: Option<&Path>,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars.clone());

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?;

        let mut app: Self = settings.try_deserialize()?;

        app.apply_legacy_credentials(|key| match &vars {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        });

        Ok(app)
    }

    /// Fill unset credentials from the plain legacy variables
    ///
    /// Both the lower-case and upper-case spelling are accepted.
    fn apply_legacy_credentials(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let legacy = |key: &str| {
            lookup(key)
                .or_else(|| lookup(&key.to_uppercase()))
                .filter(|value| !value.trim().is_empty())
                .map(SecretString::from)
        };

        if self.weather.api_key_str().is_none() {
            if let Some(key) = legacy(LEGACY_WEATHER_KEY) {
                debug!("Using legacy weather API key variable");
                self.weather.api_key = Some(key);
            }
        }
        if self.inference.api_key_str().is_none() {
            if let Some(key) = legacy(LEGACY_INFERENCE_KEY) {
                debug!("Using legacy Gemini API key variable");
                self.inference.api_key = Some(key);
            }
        }
        if self.speech.api_key_str().is_none() {
            if let Some(key) = legacy(LEGACY_SPEECH_KEY) {
                debug!("Using legacy ElevenLabs API key variable");
                self.speech.api_key = Some(key);
            }
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.api_key_str().is_none() {
            return Err(ConfigError::Invalid(format!(
                "weather.api_key is required (or set {LEGACY_WEATHER_KEY})"
            )));
        }
        if self.inference.api_key_str().is_none() {
            return Err(ConfigError::Invalid(format!(
                "inference.api_key is required (or set {LEGACY_INFERENCE_KEY})"
            )));
        }

        check_url("weather.base_url", &self.weather.base_url)?;
        check_url("inference.base_url", &self.inference.base_url)?;
        check_url("speech.base_url", &self.speech.base_url)?;
        check_url("geolocation.base_url", &self.geolocation.base_url)?;

        check_timeout("weather.timeout_secs", self.weather.timeout_secs)?;
        check_timeout("inference.timeout_secs", self.inference.timeout_secs)?;
        check_timeout("speech.timeout_secs", self.speech.timeout_secs)?;
        check_timeout("geolocation.timeout_secs", self.geolocation.timeout_secs)?;

        if self.inference.default_model.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "inference.default_model must not be empty".to_string(),
            ));
        }

        self.speech
            .voice()
            .map_err(|e| ConfigError::Invalid(format!("speech.default_voice: {e}")))?;

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn check_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{field} must start with http:// or https://, got {url}"
        )))
    }
}

fn check_timeout(field: &str, timeout_secs: Option<u64>) -> Result<(), ConfigError> {
    if timeout_secs == Some(0) {
        Err(ConfigError::Invalid(format!(
            "{field} must be greater than 0"
        )))
    } else {
        Ok(())
    }
}
