//! Temperature value object with unit conversion
//!
//! # Examples
//!
//! ```
//! use domain::{Temperature, TemperatureUnit};
//!
//! let t = Temperature::celsius(100.0);
//! assert_eq!(t.to_unit(TemperatureUnit::Fahrenheit).value(), 212.0);
//! assert_eq!(t.to_string(), "100.0°C");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Display suffix, e.g. `°C`
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// A temperature reading in a specific unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    value: f64,
    unit: TemperatureUnit,
}

impl Temperature {
    /// Create a temperature in the given unit
    #[must_use]
    pub const fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// Create a temperature in Celsius
    #[must_use]
    pub const fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// Create a temperature in Fahrenheit
    #[must_use]
    pub const fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    /// Numeric value in [`Self::unit`]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Unit of [`Self::value`]
    #[must_use]
    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Convert to another unit
    #[must_use]
    pub fn to_unit(self, target: TemperatureUnit) -> Self {
        let value = match (self.unit, target) {
            (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
                self.value.mul_add(9.0 / 5.0, 32.0)
            },
            (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
                (self.value - 32.0) * 5.0 / 9.0
            },
            _ => self.value,
        };
        Self::new(value, target)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}{}", self.value, self.unit.symbol())
    }
}
