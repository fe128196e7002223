//! Measurement systems supported by the weather provider

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::TemperatureUnit;

/// Meters per second to miles per hour
const MPS_TO_MPH: f64 = 2.236_936;

/// Unit system used for requests and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, meters per second
    #[default]
    Metric,
    /// Fahrenheit, miles per hour
    Imperial,
}

impl UnitSystem {
    /// The other unit system
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    /// Value of the `units` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Temperature unit for this system
    #[must_use]
    pub const fn temperature_unit(self) -> TemperatureUnit {
        match self {
            Self::Metric => TemperatureUnit::Celsius,
            Self::Imperial => TemperatureUnit::Fahrenheit,
        }
    }

    /// Label for wind speed values
    #[must_use]
    pub const fn wind_speed_label(self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }

    /// Convert a wind speed expressed in `self` into `target`
    #[must_use]
    pub fn convert_wind_speed(self, speed: f64, target: Self) -> f64 {
        match (self, target) {
            (Self::Metric, Self::Imperial) => speed * MPS_TO_MPH,
            (Self::Imperial, Self::Metric) => speed / MPS_TO_MPH,
            _ => speed,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "c" | "celsius" => Ok(Self::Metric),
            "imperial" | "f" | "fahrenheit" => Ok(Self::Imperial),
            _ => Err(DomainError::InvalidUnitSystem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_metric() {
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(UnitSystem::Metric.toggled(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Imperial.toggled(), UnitSystem::Metric);
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!("F".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert_eq!(
            " Imperial ".parse::<UnitSystem>().unwrap(),
            UnitSystem::Imperial
        );
        assert!("kelvin".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn wind_speed_conversion() {
        let mph = UnitSystem::Metric.convert_wind_speed(10.0, UnitSystem::Imperial);
        assert!((mph - 22.369_36).abs() < 1e-6);

        let back = UnitSystem::Imperial.convert_wind_speed(mph, UnitSystem::Metric);
        assert!((back - 10.0).abs() < 1e-9);

        let same = UnitSystem::Metric.convert_wind_speed(4.2, UnitSystem::Metric);
        assert!((same - 4.2).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
    }
}
