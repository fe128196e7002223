//! IP geolocation port

use async_trait::async_trait;
use domain::{CityName, GeoLocation};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Approximate location of the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLocation {
    pub city: CityName,
    pub region: Option<String>,
    pub country: Option<String>,
    pub coordinates: Option<GeoLocation>,
}

/// Port for resolving the caller's city from their network address
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeoLocationPort: Send + Sync {
    /// Resolve the city of the public IP address this process connects from
    async fn detect_location(&self) -> Result<DetectedLocation, ApplicationError>;
}
