//! Compass heading value object

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use std::fmt;

use crate::de::scalar_text;
use crate::errors::DomainError;

/// Heading in whole degrees (0 = North, 90 = East), within [0, 360]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u16")]
pub struct Heading(u16);

impl Heading {
    /// Create a heading with range validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeading` for values above 360.
    pub fn new(degrees: u16) -> Result<Self, DomainError> {
        if degrees > 360 {
            return Err(DomainError::InvalidHeading(degrees.to_string()));
        }
        Ok(Self(degrees))
    }

    /// Parse a heading from its decimal text form
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeading` if the text is not an integer in [0, 360].
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let degrees: i64 = text
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidHeading(text.to_string()))?;
        u16::try_from(degrees)
            .map_err(|_| DomainError::InvalidHeading(text.to_string()))
            .and_then(Self::new)
    }

    /// Degrees as an integer
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.0
    }

    /// Eight-point compass label
    #[must_use]
    pub const fn compass_point(self) -> &'static str {
        match (self.0 + 22) % 360 / 45 {
            0 => "N",
            1 => "NE",
            2 => "E",
            3 => "SE",
            4 => "S",
            5 => "SW",
            6 => "W",
            _ => "NW",
        }
    }
}

impl From<Heading> for u16 {
    fn from(value: Heading) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Heading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let text = scalar_text(&raw)
            .ok_or_else(|| D::Error::custom(format!("Heading must be a valid integer, got: {raw}")))?;
        Self::parse(&text).map_err(D::Error::custom)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
