//! Aggregated forecast for one calendar day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Temperature, TemperatureUnit};

/// Representative weather for one forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The calendar date
    pub date: NaiveDate,
    /// Mean of all sample temperatures on this date
    pub average_temperature: Temperature,
    /// Most frequent description on this date
    pub description: String,
    /// Number of samples that contributed
    pub samples: usize,
}

impl DailySummary {
    /// Express the average in another temperature unit
    #[must_use]
    pub fn convert_to(&self, unit: TemperatureUnit) -> Self {
        Self {
            average_temperature: self.average_temperature.to_unit(unit),
            ..self.clone()
        }
    }
}
