//! Weather service port
//!
//! Defines the interface for current weather retrieval.

use async_trait::async_trait;
use domain::WeatherObservation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a named city, in metric units
    ///
    /// Every call reaches the provider; nothing is cached.
    async fn current_weather(&self, city: &str) -> Result<WeatherObservation, ApplicationError>;
}
