//! Weather data models
//!
//! Typed results returned by the client, plus the raw OpenWeatherMap
//! response shapes they are parsed from.

use chrono::{DateTime, NaiveDateTime, Utc};
use domain::{DEFAULT_ICON, UnitSystem};
use serde::{Deserialize, Serialize};

/// Current weather for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// City name as resolved by the provider
    pub city: String,
    /// ISO 3166 country code (empty if unknown)
    pub country: String,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Apparent temperature in the requested units
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Lowercase description, e.g. "broken clouds"
    pub description: String,
    /// Icon code, e.g. "04d"
    pub icon: String,
    /// Wind speed (m/s metric, mph imperial)
    pub wind_speed: f64,
    /// Cloud cover percentage (0-100)
    pub cloudiness: u8,
    /// Observation time
    pub observed_at: DateTime<Utc>,
    /// Units the values are expressed in
    pub units: UnitSystem,
}

/// One 3-hourly forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Timestamp as reported in `dt_txt`
    pub time: NaiveDateTime,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Lowercase description
    pub description: String,
    /// Icon code
    pub icon: String,
}

/// 5 day / 3 hour forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// City name as resolved by the provider, if included
    pub city: Option<String>,
    /// ISO 3166 country code (empty if unknown)
    pub country: String,
    /// Entries in the order returned by the provider
    pub entries: Vec<ForecastEntry>,
    /// Units the values are expressed in
    pub units: UnitSystem,
}

// ==============================
// Raw API shapes
// ==============================

/// Raw `/weather` response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sys: SysData,
    pub main: MainData,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
    #[serde(default)]
    pub wind: WindData,
    #[serde(default)]
    pub clouds: CloudData,
    #[serde(default)]
    pub dt: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysData {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainData {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: u8,
    #[serde(default)]
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionData {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindData {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloudData {
    #[serde(default)]
    pub all: u8,
}

/// Raw `/forecast` response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastItem>,
    #[serde(default)]
    pub city: Option<ForecastCity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    pub main: MainData,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
    pub dt_txt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastCity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

/// Description and icon of the first condition entry, with fallbacks
pub fn primary_condition(conditions: &[ConditionData]) -> (String, String) {
    conditions.first().map_or_else(
        || (String::new(), DEFAULT_ICON.to_string()),
        |c| {
            let icon = if c.icon.is_empty() {
                DEFAULT_ICON.to_string()
            } else {
                c.icon.clone()
            };
            (c.description.clone(), icon)
        },
    )
}
