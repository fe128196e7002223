//! Current weather conditions for a city

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Temperature, UnitSystem};

/// Icon code used when the provider omits one
pub const DEFAULT_ICON: &str = "01d";

/// Snapshot of the weather at a city right now
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// City name as resolved by the provider
    pub city: String,
    /// ISO 3166 country code, may be empty
    pub country: String,
    /// Air temperature
    pub temperature: Temperature,
    /// Apparent ("feels like") temperature
    pub feels_like: Temperature,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Provider description, e.g. "light rain"
    pub description: String,
    /// Provider icon code, e.g. "10d"
    pub icon: String,
    /// Wind speed in the unit of `units`
    pub wind_speed: f64,
    /// Sea-level pressure in hPa
    pub pressure: u32,
    /// Cloud cover in percent (0-100)
    pub cloudiness: u8,
    /// Observation time
    pub observed_at: DateTime<Utc>,
    /// Unit system the values are expressed in
    pub units: UnitSystem,
}

impl CurrentConditions {
    /// "City, CC", or just the city when the country is unknown
    #[must_use]
    pub fn location_label(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }

    /// Description with every word capitalized
    #[must_use]
    pub fn display_description(&self) -> String {
        title_case(&self.description)
    }

    /// URL of the provider's 2x icon image
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }

    /// Express all values in another unit system
    #[must_use]
    pub fn convert_to(&self, units: UnitSystem) -> Self {
        let unit = units.temperature_unit();
        Self {
            temperature: self.temperature.to_unit(unit),
            feels_like: self.feels_like.to_unit(unit),
            wind_speed: self.units.convert_wind_speed(self.wind_speed, units),
            units,
            ..self.clone()
        }
    }
}

/// Capitalize the first letter of every whitespace-separated word
#[must_use]
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
