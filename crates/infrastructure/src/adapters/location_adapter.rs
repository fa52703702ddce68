//! Location adapter - Implements LocationPort using IP geolocation

use application::error::ApplicationError;
use application::ports::LocationPort;
use async_trait::async_trait;
use integration_weather::{GeolocationClient, GeolocationConfig, GeolocationError, IpInfoClient};
use tracing::{debug, instrument};

/// Adapter for detecting the user's city from their public IP
#[derive(Debug)]
pub struct LocationAdapter {
    client: IpInfoClient,
}

impl LocationAdapter {
    /// Create an adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: GeolocationConfig) -> Result<Self, ApplicationError> {
        debug!(base_url = %config.base_url, "Geolocation client configured");
        let client = IpInfoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(err: GeolocationError) -> ApplicationError {
        match err {
            GeolocationError::RateLimitExceeded => ApplicationError::RateLimited,
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl LocationPort for LocationAdapter {
    #[instrument(skip(self))]
    async fn detect_city(&self) -> Result<String, ApplicationError> {
        self.client.detect_city().await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_creation() {
        assert!(LocationAdapter::new(GeolocationConfig::default()).is_ok());
    }

    #[test]
    fn map_error_rate_limited() {
        let mapped = LocationAdapter::map_error(GeolocationError::RateLimitExceeded);
        assert!(matches!(mapped, ApplicationError::RateLimited));
    }

    #[test]
    fn map_error_city_not_found() {
        let mapped = LocationAdapter::map_error(GeolocationError::CityNotFound);
        assert!(matches!(mapped, ApplicationError::ExternalService(_)));
    }
}
