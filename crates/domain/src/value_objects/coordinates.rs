//! Latitude and longitude value objects (WGS 84 decimal degrees)

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use std::fmt;

use crate::de::parse_number;
use crate::errors::DomainError;

/// Latitude in decimal degrees, guaranteed to lie in [-90, 90]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f64")]
pub struct Latitude(f64);

/// Longitude in decimal degrees, guaranteed to lie in [-180, 180]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f64")]
pub struct Longitude(f64);

impl Latitude {
    /// Create a latitude with range validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidLatitude` for values outside [-90, 90] (and NaN).
    pub fn new(degrees: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&degrees) {
            return Err(DomainError::InvalidLatitude(degrees.to_string()));
        }
        Ok(Self(degrees))
    }

    /// Degrees as a plain float
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }
}

impl Longitude {
    /// Create a longitude with range validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidLongitude` for values outside [-180, 180] (and NaN).
    pub fn new(degrees: f64) -> Result<Self, DomainError> {
        if !(-180.0..=180.0).contains(&degrees) {
            return Err(DomainError::InvalidLongitude(degrees.to_string()));
        }
        Ok(Self(degrees))
    }

    /// Degrees as a plain float
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }
}

impl From<Latitude> for f64 {
    fn from(value: Latitude) -> Self {
        value.0
    }
}

impl From<Longitude> for f64 {
    fn from(value: Longitude) -> Self {
        value.0
    }
}

// The bus API sends vehicle coordinates as strings and stop coordinates as
// numbers, so both forms are accepted.
impl<'de> Deserialize<'de> for Latitude {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let degrees: f64 = parse_number(&raw).map_err(|_| {
            D::Error::custom(format!("Coordinate must be a valid decimal number, got: {raw}"))
        })?;
        Self::new(degrees).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Longitude {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let degrees: f64 = parse_number(&raw).map_err(|_| {
            D::Error::custom(format!("Coordinate must be a valid decimal number, got: {raw}"))
        })?;
        Self::new(degrees).map_err(D::Error::custom)
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_accepted() {
        assert!(Latitude::new(-90.0).is_ok());
        assert!(Latitude::new(90.0).is_ok());
        assert!(Longitude::new(-180.0).is_ok());
        assert!(Longitude::new(180.0).is_ok());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(Latitude::new(90.000_001).is_err());
        assert!(Latitude::new(-91.0).is_err());
        assert!(Longitude::new(180.5).is_err());
        assert!(Longitude::new(-181.0).is_err());
        assert!(Latitude::new(f64::NAN).is_err());
    }

    #[test]
    fn deserializes_from_string_or_number() {
        let lat: Latitude = serde_json::from_str("\"41.88063\"").unwrap();
        assert!((lat.degrees() - 41.880_63).abs() < 1e-9);

        let lon: Longitude = serde_json::from_str("-87.6298").unwrap();
        assert!((lon.degrees() + 87.6298).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = serde_json::from_str::<Latitude>("\"north\"").unwrap_err();
        assert!(err.to_string().contains("valid decimal number"));
    }

    #[test]
    fn rejects_out_of_range_payload() {
        let err = serde_json::from_str::<Longitude>("\"200\"").unwrap_err();
        assert!(err.to_string().contains("Longitude must be between"));
    }
}
