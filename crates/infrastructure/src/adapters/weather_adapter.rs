//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{DomainError, WeatherObservation};
use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for current weather using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        debug!(base_url = %config.base_url, timeout_secs = ?config.timeout_secs, "Weather client configured");
        let client =
            OpenWeatherMapClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::EmptyCity => DomainError::InvalidCity(String::new()).into(),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::Unauthorized(e) => ApplicationError::Configuration(format!(
                "weather provider rejected the API key: {e}"
            )),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_weather(&self, city: &str) -> Result<WeatherObservation, ApplicationError> {
        let observation = self.client.get_current(city).await.map_err(Self::map_error)?;

        debug!(
            city = %observation.city,
            country = %observation.country,
            temperature = observation.temperature_c,
            "Fetched current weather"
        );

        Ok(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_creation() {
        let adapter = WeatherAdapter::new(WeatherConfig {
            api_key: "key".to_string(),
            ..Default::default()
        });
        assert!(adapter.is_ok());
    }

    #[test]
    fn debug_hides_client_details() {
        let adapter = WeatherAdapter::new(WeatherConfig {
            api_key: "secret-key".to_string(),
            ..Default::default()
        })
        .unwrap();
        let debug = format!("{adapter:?}");
        assert!(debug.contains("OpenWeatherMapClient"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn map_error_rate_limited() {
        let mapped = WeatherAdapter::map_error(WeatherError::RateLimitExceeded);
        assert!(matches!(mapped, ApplicationError::RateLimited));
    }

    #[test]
    fn map_error_city_not_found() {
        let mapped = WeatherAdapter::map_error(WeatherError::CityNotFound("Atlantis".to_string()));
        let ApplicationError::ExternalService(msg) = mapped else {
            unreachable!("Expected ExternalService error");
        };
        assert!(msg.contains("Atlantis"));
    }

    #[test]
    fn map_error_unauthorized_is_configuration() {
        let mapped = WeatherAdapter::map_error(WeatherError::Unauthorized("bad key".to_string()));
        assert!(matches!(mapped, ApplicationError::Configuration(_)));
    }

    #[test]
    fn map_error_empty_city_is_domain() {
        let mapped = WeatherAdapter::map_error(WeatherError::EmptyCity);
        assert!(matches!(
            mapped,
            ApplicationError::Domain(DomainError::InvalidCity(_))
        ));
    }

    #[test]
    fn map_error_parse_is_internal() {
        let mapped = WeatherAdapter::map_error(WeatherError::ParseError("missing field".to_string()));
        assert!(matches!(mapped, ApplicationError::Internal(_)));
    }
}
