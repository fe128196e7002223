//! ipapi.co client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{IpApiResponse, IpLocation, non_blank};

/// `reason` value ipapi.co reports when throttling
const RATE_LIMITED_REASON: &str = "RateLimited";

/// Geolocation client errors
#[derive(Debug, Error)]
pub enum GeolocationError {
    /// HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the geolocation service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service reported an error for this address
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// The address resolved, but without a city
    #[error("No city found for this address")]
    CityUnknown,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Geolocation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationConfig {
    /// API base URL (default: <https://ipapi.co>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://ipapi.co".to_string()
}

const fn default_timeout() -> u64 {
    5
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Resolves the caller's approximate location
#[async_trait]
pub trait GeolocationClient: Send + Sync {
    /// Look up the public address of this process
    async fn lookup(&self) -> Result<IpLocation, GeolocationError>;
}

/// ipapi.co HTTP client implementation
#[derive(Debug)]
pub struct IpApiClient {
    client: Client,
    config: GeolocationConfig,
}

impl IpApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeolocationConfig) -> Result<Self, GeolocationError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            // ipapi.co rejects requests without a user agent
            .user_agent(concat!("nimbus/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeolocationError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn lookup_url(&self) -> String {
        format!("{}/json/", self.config.base_url.trim_end_matches('/'))
    }

    /// Turn a decoded body into a location
    fn parse_response(data: IpApiResponse) -> Result<IpLocation, GeolocationError> {
        if data.error {
            let reason = data.reason.unwrap_or_else(|| "unknown error".to_string());
            return Err(if reason == RATE_LIMITED_REASON {
                GeolocationError::RateLimitExceeded
            } else {
                GeolocationError::Lookup(reason)
            });
        }

        let city = non_blank(data.city).ok_or(GeolocationError::CityUnknown)?;

        Ok(IpLocation {
            city,
            region: non_blank(data.region),
            country: non_blank(data.country_name),
            country_code: non_blank(data.country_code),
            latitude: data.latitude,
            longitude: data.longitude,
        })
    }
}

#[async_trait]
impl GeolocationClient for IpApiClient {
    #[instrument(skip(self))]
    async fn lookup(&self) -> Result<IpLocation, GeolocationError> {
        let url = self.lookup_url();
        debug!(url = %url, "Looking up caller location");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeolocationError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeolocationError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(GeolocationError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(GeolocationError::RequestFailed(format!("HTTP {status}")));
        }

        let data: IpApiResponse = response
            .json()
            .await
            .map_err(|e| GeolocationError::ParseError(e.to_string()))?;

        let location = Self::parse_response(data)?;
        debug!(city = %location.city, "Resolved caller location");
        Ok(location)
    }
}
