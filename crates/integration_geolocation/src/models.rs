//! Geolocation data models

use serde::{Deserialize, Serialize};

/// Approximate location of an IP address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpLocation {
    /// City name, never blank
    pub city: String,
    /// Region or state
    pub region: Option<String>,
    /// Country name
    pub country: Option<String>,
    /// ISO 3166 country code
    pub country_code: Option<String>,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
}

/// Raw `/json/` response
///
/// Failures come back with HTTP 200 and `error: true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpApiResponse {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Treat blank strings as missing
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
