//! Wiring of adapters into a ready-to-use assistant

use std::sync::Arc;

use application::{ApplicationError, WeatherAssistant};
use tracing::info;

use crate::{
    adapters::{GeminiInferenceAdapter, LocationAdapter, SpeechAdapter, WeatherAdapter},
    config::AppConfig,
};

/// Build the assistant from a loaded configuration
///
/// Speech is enabled only when an ElevenLabs key is configured.
///
/// # Errors
///
/// Returns an error if any HTTP client fails to initialize.
pub fn build_assistant(config: &AppConfig) -> Result<WeatherAssistant, ApplicationError> {
    let inference = Arc::new(GeminiInferenceAdapter::new(
        config.inference.to_inference_config(),
    )?);
    let weather = Arc::new(WeatherAdapter::new(config.weather.to_weather_config())?);
    let location = Arc::new(LocationAdapter::new(config.geolocation.clone())?);

    let assistant = WeatherAssistant::new(inference, weather, location);

    if config.speech.has_api_key() {
        let speech = SpeechAdapter::new(config.speech.to_speech_config())?;
        info!("Speech synthesis enabled");
        Ok(assistant.with_speech(Arc::new(speech)))
    } else {
        info!("No ElevenLabs API key configured, speech synthesis disabled");
        Ok(assistant)
    }
}
