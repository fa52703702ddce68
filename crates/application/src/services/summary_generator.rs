//! Summary generator - Turns an observation into a direct answer

use std::{fmt, sync::Arc};

use domain::{SummaryText, WeatherObservation, format_celsius, format_wind};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::ports::InferencePort;

/// The language model call for the summary failed
///
/// Kept apart from the summary text so the caller decides how to show it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct SummaryGenerationFailed {
    pub detail: String,
}

/// Build the summary prompt
///
/// `user_text` is empty when the cycle was triggered by location detection.
#[must_use]
pub fn summary_prompt(observation: &WeatherObservation, user_text: &str) -> String {
    format!(
        "user asked: {user_text}\n\
         Create a direct answer to the user's weather query, followed by a concise summary for {heading} with this data:\n\
         Temperature: {temp}\n\
         Feels like: {feels_like}\n\
         Pressure: {pressure} hPa\n\
         Conditions: {conditions}\n\
         Humidity: {humidity}%\n\
         Wind: {wind}\n\
         Answer the user's question directly first, then provide a clean, factual summary in words",
        heading = observation.heading(),
        temp = format_celsius(observation.temperature_c),
        feels_like = format_celsius(observation.feels_like_c),
        pressure = observation.pressure_hpa,
        conditions = observation.condition_line(),
        humidity = observation.humidity_pct,
        wind = format_wind(observation.wind_speed),
    )
}

/// Generates the natural-language summary for one observation
pub struct SummaryGenerator {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for SummaryGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryGenerator")
            .field("model", &self.inference.current_model())
            .finish_non_exhaustive()
    }
}

impl SummaryGenerator {
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Summarize an observation with a single stateless model call
    ///
    /// # Errors
    ///
    /// Returns `SummaryGenerationFailed` if the model call fails or yields
    /// nothing but whitespace.
    #[instrument(skip(self, observation, user_text), fields(city = %observation.city))]
    pub async fn summarize(
        &self,
        observation: &WeatherObservation,
        user_text: &str,
    ) -> Result<SummaryText, SummaryGenerationFailed> {
        let prompt = summary_prompt(observation, user_text);

        match self.inference.generate(&prompt).await {
            Ok(result) => {
                let summary = SummaryText::new(result.content.trim());
                if summary.is_blank() {
                    warn!(model = %result.model, "Summary model returned empty text");
                    return Err(SummaryGenerationFailed {
                        detail: "model returned an empty summary".to_string(),
                    });
                }
                debug!(
                    model = %result.model,
                    tokens = ?result.tokens_used,
                    latency_ms = result.latency_ms,
                    "Summary generated"
                );
                Ok(summary)
            },
            Err(e) => {
                warn!(error = %e, "Summary generation failed");
                Err(SummaryGenerationFailed {
                    detail: e.to_string(),
                })
            },
        }
    }
}
