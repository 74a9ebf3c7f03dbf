//! Line and direction codes

use std::fmt;
use std::str::FromStr;

use domain::DomainError;
use serde::{Deserialize, Serialize};

/// An 'L' line, by its API route code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainLine {
    /// Red Line (`Red`)
    Red,
    /// Blue Line (`Blue`)
    Blue,
    /// Brown Line (`Brn`)
    Brown,
    /// Green Line (`G`)
    Green,
    /// Orange Line (`Org`)
    Orange,
    /// Purple Line (`P`)
    Purple,
    /// Pink Line (`Pink`)
    Pink,
    /// Yellow Line (`Y`)
    Yellow,
}

impl TrainLine {
    /// Every line
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Blue,
        Self::Brown,
        Self::Green,
        Self::Orange,
        Self::Purple,
        Self::Pink,
        Self::Yellow,
    ];

    /// Look up a route code; case-insensitive, since positions responses
    /// name routes in lower case
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|line| line.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Route code used in requests (`rt`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Brown => "Brn",
            Self::Green => "G",
            Self::Orange => "Org",
            Self::Purple => "P",
            Self::Pink => "Pink",
            Self::Yellow => "Y",
        }
    }

    /// Display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Brown => "Brown",
            Self::Green => "Green",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
            Self::Pink => "Pink",
            Self::Yellow => "Yellow",
        }
    }
}

impl FromStr for TrainLine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| DomainError::unknown_code("rt", "Red, Blue, Brn, G, Org, P, Pink, Y", s))
    }
}

impl fmt::Display for TrainLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Route direction code (`trDr`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainDirection {
    /// Code `1`
    NorthInbound,
    /// Code `5`
    SouthOutbound,
}

impl TrainDirection {
    /// Look up a direction code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(Self::NorthInbound),
            "5" => Some(Self::SouthOutbound),
            _ => None,
        }
    }

    /// Numeric code as sent by the API
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NorthInbound => "1",
            Self::SouthOutbound => "5",
        }
    }

    /// Description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NorthInbound => "North/Inbound",
            Self::SouthOutbound => "South/Outbound",
        }
    }
}

impl fmt::Display for TrainDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
