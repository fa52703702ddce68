//! IP geolocation client
//!
//! Detects the caller's city from their public IP using an ipinfo-compatible
//! `/json` endpoint. No API token is needed for the basic lookup.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::IpInfoResponse;

/// Configuration for the geolocation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationConfig {
    /// Base URL of the ipinfo-compatible API
    #[serde(default = "default_geolocation_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; unset leaves the HTTP client default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_geolocation_base_url() -> String {
    "https://ipinfo.io".to_string()
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            base_url: default_geolocation_base_url(),
            timeout_secs: None,
        }
    }
}

/// Errors that can occur during location detection
#[derive(Debug, Error)]
pub enum GeolocationError {
    /// Connection to the geolocation service failed
    #[error("Geolocation connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the geolocation service failed
    #[error("Geolocation request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the geolocation response
    #[error("Geolocation parse error: {0}")]
    ParseError(String),

    /// The response carried no city
    #[error("No city found for this IP address")]
    CityNotFound,

    /// Rate limit exceeded
    #[error("Geolocation rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Geolocation request timed out")]
    Timeout,
}

impl From<reqwest::Error> for GeolocationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Trait for IP geolocation clients
#[async_trait]
pub trait GeolocationClient: Send + Sync {
    /// Detect the city of the current public IP address
    async fn detect_city(&self) -> Result<String, GeolocationError>;
}

/// ipinfo-based geolocation client
#[derive(Debug)]
pub struct IpInfoClient {
    client: Client,
    config: GeolocationConfig,
}

impl IpInfoClient {
    /// Create a new geolocation client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeolocationConfig) -> Result<Self, GeolocationError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GeolocationError::ConnectionFailed(e.to_string()))?;

        debug!(base_url = %config.base_url, "Geolocation client initialized");

        Ok(Self { client, config })
    }
}

#[async_trait]
impl GeolocationClient for IpInfoClient {
    #[instrument(skip(self))]
    async fn detect_city(&self) -> Result<String, GeolocationError> {
        let url = format!("{}/json", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, "Detecting location");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeolocationError::RateLimitExceeded);
        }
        if !status.is_success() {
            warn!(%status, "Geolocation request failed");
            return Err(GeolocationError::RequestFailed(format!("HTTP {status}")));
        }

        let info: IpInfoResponse = response
            .json()
            .await
            .map_err(|e| GeolocationError::ParseError(e.to_string()))?;

        debug!(
            region = info.region.as_deref().unwrap_or("-"),
            country = info.country.as_deref().unwrap_or("-"),
            "Geolocation response received"
        );

        info.city
            .map(|city| city.trim().to_string())
            .filter(|city| !city.is_empty())
            .ok_or(GeolocationError::CityNotFound)
    }
}
