//! Location port - Interface for detecting the user's city

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for location detection
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Detect the city the user is currently in
    async fn detect_city(&self) -> Result<String, ApplicationError>;
}
