//! Geolocation adapter - Implements GeoLocationPort using integration_geolocation

use application::error::ApplicationError;
use application::ports::{DetectedLocation, GeoLocationPort};
use async_trait::async_trait;
use domain::{CityName, GeoLocation};
use integration_geolocation::{
    GeolocationClient, GeolocationConfig, GeolocationError, IpApiClient, IpLocation,
};
use tracing::{debug, instrument, warn};

/// Adapter resolving the caller's city through ipapi.co
pub struct GeoLocationAdapter {
    client: IpApiClient,
}

impl std::fmt::Debug for GeoLocationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoLocationAdapter")
            .field("client", &"IpApiClient")
            .finish()
    }
}

impl GeoLocationAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: GeolocationConfig) -> Result<Self, ApplicationError> {
        let client =
            IpApiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(err: GeolocationError) -> ApplicationError {
        match err {
            GeolocationError::RateLimitExceeded => ApplicationError::RateLimited,
            other => ApplicationError::LocationUnavailable(other.to_string()),
        }
    }

    /// Convert a lookup result to the port's location type
    ///
    /// Out-of-range coordinates are dropped rather than failing the lookup.
    fn map_location(location: IpLocation) -> Result<DetectedLocation, ApplicationError> {
        let city = CityName::new(&location.city)
            .map_err(|e| ApplicationError::LocationUnavailable(e.to_string()))?;

        let coordinates = match (location.latitude, location.longitude) {
            (Some(lat), Some(lon)) => GeoLocation::new(lat, lon)
                .inspect_err(|_| warn!(lat, lon, "Ignoring invalid coordinates"))
                .ok(),
            _ => None,
        };

        Ok(DetectedLocation {
            city,
            region: location.region,
            country: location.country,
            coordinates,
        })
    }
}

#[async_trait]
impl GeoLocationPort for GeoLocationAdapter {
    #[instrument(skip(self))]
    async fn detect_location(&self) -> Result<DetectedLocation, ApplicationError> {
        let location = self.client.lookup().await.map_err(Self::map_error)?;
        debug!(city = %location.city, "Location lookup succeeded");
        Self::map_location(location)
    }
}
