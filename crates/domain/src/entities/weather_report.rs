//! Complete result of a weather lookup

use serde::{Deserialize, Serialize};

use crate::entities::{CurrentConditions, DailySummary};
use crate::value_objects::UnitSystem;

/// Current conditions plus per-day forecast summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    /// One entry per forecast day after today, in date order
    pub daily: Vec<DailySummary>,
    pub units: UnitSystem,
}

impl WeatherReport {
    /// Convert every value to another unit system without refetching
    #[must_use]
    pub fn convert_to(&self, units: UnitSystem) -> Self {
        if units == self.units {
            return self.clone();
        }
        let unit = units.temperature_unit();
        Self {
            current: self.current.convert_to(units),
            daily: self.daily.iter().map(|d| d.convert_to(unit)).collect(),
            units,
        }
    }
}
