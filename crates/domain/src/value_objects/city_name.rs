//! City name value object
//!
//! The user-entered search term for a weather lookup.
//!
//! # Examples
//!
//! ```
//! use domain::CityName;
//!
//! let city = CityName::new("  New York ").unwrap();
//! assert_eq!(city.as_str(), "New York");
//!
//! // Blank input is rejected with the message shown to the user
//! let err = CityName::new("   ").unwrap_err();
//! assert_eq!(err.to_string(), "Please enter a city name");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Message shown when the search field is empty
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name";

/// A trimmed, non-empty city name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityName(String);

impl CityName {
    /// Longest accepted name in characters
    pub const MAX_LEN: usize = 100;

    /// Create a city name from raw user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCityName` if the trimmed input is empty,
    /// longer than [`Self::MAX_LEN`] characters, or contains control characters.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(DomainError::invalid_city(EMPTY_CITY_MESSAGE));
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(DomainError::invalid_city(format!(
                "City name is too long (max {} characters)",
                Self::MAX_LEN
            )));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(DomainError::invalid_city(
                "City name must not contain control characters",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as entered (trimmed)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive key, used for caching lookups
    #[must_use]
    pub fn cache_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CityName> for String {
    fn from(city: CityName) -> Self {
        city.0
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
