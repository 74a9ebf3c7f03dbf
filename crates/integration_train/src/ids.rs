//! Station and platform identifiers
//!
//! Parent stations use five-digit ids in the 4xxxx range; platforms
//! (stops) use five-digit ids in the 3xxxx range.

use std::fmt;

use domain::DomainError;
use serde::{Deserialize, Serialize};

fn is_five_digit(text: &str, leading: char) -> bool {
    text.len() == 5 && text.starts_with(leading) && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parent station id (`mapid` in requests, `staId` in responses)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station id
    ///
    /// # Errors
    ///
    /// Returns `UnknownCode` unless the text is five digits starting with 4.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        if is_five_digit(text, '4') {
            Ok(Self(text.to_string()))
        } else {
            Err(DomainError::unknown_code("staId", "5 digits starting with 4", text))
        }
    }

    /// The id text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Platform id (`stpid` in requests, `stpId` in responses)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StopId(String);

impl StopId {
    /// Parse a stop id
    ///
    /// # Errors
    ///
    /// Returns `UnknownCode` unless the text is five digits starting with 3.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        if is_five_digit(text, '3') {
            Ok(Self(text.to_string()))
        } else {
            Err(DomainError::unknown_code("stpId", "5 digits starting with 3", text))
        }
    }

    /// The id text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StopId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StopId> for String {
    fn from(id: StopId) -> Self {
        id.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
