//! Enumerated codes used in Bus Tracker responses

use std::fmt;

use domain::DomainError;
use domain::de::{parse_number, scalar_text};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize an integer code sent as a number or numeric string
fn integer_code<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64, Error = DomainError>,
{
    let raw = Value::deserialize(deserializer)?;
    let code: i64 = parse_number(&raw).map_err(D::Error::custom)?;
    T::try_from(code).map_err(D::Error::custom)
}

/// Ratio of passengers to vehicle capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassengerLoad {
    /// At or near capacity
    #[serde(rename = "FULL")]
    Full,
    /// Roughly half full
    #[serde(rename = "HALF_EMPTY")]
    HalfEmpty,
    /// Few or no passengers
    #[serde(rename = "EMPTY")]
    Empty,
    /// Load unknown
    #[serde(rename = "N/A")]
    Unknown,
}

impl PassengerLoad {
    /// Parse the documented spelling
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FULL" => Some(Self::Full),
            "HALF_EMPTY" => Some(Self::HalfEmpty),
            "EMPTY" => Some(Self::Empty),
            "N/A" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Documented spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::HalfEmpty => "HALF_EMPTY",
            Self::Empty => "EMPTY",
            Self::Unknown => "N/A",
        }
    }
}

impl fmt::Display for PassengerLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Passenger load on predictions: empty or unrecognised values become
/// [`PassengerLoad::Unknown`] instead of failing
pub(crate) fn tolerant_passenger_load<'de, D>(deserializer: D) -> Result<Option<PassengerLoad>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    Ok(Some(
        scalar_text(&raw)
            .as_deref()
            .and_then(PassengerLoad::from_code)
            .unwrap_or(PassengerLoad::Unknown),
    ))
}

/// Transportation mode of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransportMode {
    /// No mode reported
    None,
    /// Bus
    Bus,
    /// Ferry
    Ferry,
    /// Rail
    Rail,
    /// People mover
    PeopleMover,
}

impl TryFrom<i64> for TransportMode {
    type Error = DomainError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Bus),
            2 => Ok(Self::Ferry),
            3 => Ok(Self::Rail),
            4 => Ok(Self::PeopleMover),
            other => Err(DomainError::unknown_code(
                "mode",
                "0-4 (0=None, 1=Bus, 2=Ferry, 3=Rail, 4=People_Mover)",
                other,
            )),
        }
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        integer_code(deserializer)
    }
}

/// GTFS stop status of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StopStatus {
    /// Standing at the stop
    StoppedAt,
    /// About to arrive
    IncomingAt,
    /// Travelling towards the stop
    InTransitTo,
}

impl TryFrom<i64> for StopStatus {
    type Error = DomainError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::StoppedAt),
            1 => Ok(Self::IncomingAt),
            2 => Ok(Self::InTransitTo),
            other => Err(DomainError::unknown_code(
                "stopstatus",
                "0 (STOPPED_AT), 1 (INCOMING_AT), or 2 (IN_TRANSIT_TO)",
                other,
            )),
        }
    }
}

impl<'de> Deserialize<'de> for StopStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        integer_code(deserializer)
    }
}

/// Whether a prediction is for arrival or departure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionType {
    /// Arrival at the stop
    #[serde(rename = "A")]
    Arrival,
    /// Departure from the stop (first stops, layovers)
    #[serde(rename = "D")]
    Departure,
}

/// Dynamic (disruption management) action affecting a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DynamicAction {
    /// No change
    None,
    /// The event or trip has been canceled
    Canceled,
    /// The event or trip has been moved to a different work
    Reassigned,
    /// The time of this event, or the entire trip, has been moved
    Shifted,
    /// Drop-off only
    Expressed,
    /// Events affected by disruption management changes
    StopsAffected,
    /// Created dynamically, not in the schedule
    NewTrip,
    /// Split or short-turned
    PartialTrip,
    /// Split with new trip identifiers
    PartialTripNew,
    /// Marked as canceled (not public)
    DelayedCancel,
    /// Event added to the trip
    AddedStop,
    /// Affected by a delay
    UnknownDelay,
    /// Dynamically created trip affected by a delay
    UnknownDelayNew,
    /// Trip invalidated
    InvalidatedTrip,
    /// Dynamically created trip invalidated
    InvalidatedTripNew,
    /// Dynamically created trip canceled
    CancelledTripNew,
    /// Dynamically created trip with affected events
    StopsAffectedNew,
}

impl DynamicAction {
    /// Numeric identifier used by the API
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Canceled => 1,
            Self::Reassigned => 2,
            Self::Shifted => 3,
            Self::Expressed => 4,
            Self::StopsAffected => 6,
            Self::NewTrip => 8,
            Self::PartialTrip => 9,
            Self::PartialTripNew => 10,
            Self::DelayedCancel => 12,
            Self::AddedStop => 13,
            Self::UnknownDelay => 14,
            Self::UnknownDelayNew => 15,
            Self::InvalidatedTrip => 16,
            Self::InvalidatedTripNew => 17,
            Self::CancelledTripNew => 18,
            Self::StopsAffectedNew => 19,
        }
    }

    /// True for actions that remove service
    #[must_use]
    pub const fn is_cancellation(self) -> bool {
        matches!(
            self,
            Self::Canceled | Self::DelayedCancel | Self::CancelledTripNew
        )
    }
}

impl TryFrom<i64> for DynamicAction {
    type Error = DomainError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::None,
            1 => Self::Canceled,
            2 => Self::Reassigned,
            3 => Self::Shifted,
            4 => Self::Expressed,
            6 => Self::StopsAffected,
            8 => Self::NewTrip,
            9 => Self::PartialTrip,
            10 => Self::PartialTripNew,
            12 => Self::DelayedCancel,
            13 => Self::AddedStop,
            14 => Self::UnknownDelay,
            15 => Self::UnknownDelayNew,
            16 => Self::InvalidatedTrip,
            17 => Self::InvalidatedTripNew,
            18 => Self::CancelledTripNew,
            19 => Self::StopsAffectedNew,
            other => {
                return Err(DomainError::unknown_code(
                    "dyn",
                    "0, 1, 2, 3, 4, 6, 8, 9, 10, 12-19",
                    other,
                ));
            },
        })
    }
}

impl<'de> Deserialize<'de> for DynamicAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        integer_code(deserializer)
    }
}

/// Minutes until a predicted arrival
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Countdown {
    /// Arriving now
    Due,
    /// Delayed, no estimate
    Delayed,
    /// Minutes remaining
    Minutes(u32),
}

impl Countdown {
    /// Parse `DUE`, `DLY` (any case) or a non-negative minute count
    ///
    /// # Errors
    ///
    /// Returns `UnknownCode` for anything else.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("due") {
            return Ok(Self::Due);
        }
        if text.eq_ignore_ascii_case("dly") {
            return Ok(Self::Delayed);
        }
        text.parse::<u32>()
            .map(Self::Minutes)
            .map_err(|_| DomainError::unknown_code("prdctdn", "a number, 'DUE', or 'DLY'", text))
    }
}

impl<'de> Deserialize<'de> for Countdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let text = scalar_text(&raw)
            .ok_or_else(|| D::Error::custom(format!("prdctdn must be text, got: {raw}")))?;
        Self::parse(&text).map_err(D::Error::custom)
    }
}

/// Flag-stop information for a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlagStop {
    /// No flag-stop information
    Undefined,
    /// Normal stop
    Normal,
    /// Flag stop for pickup and discharge
    PickupAndDischarge,
    /// Flag stop for discharge only
    OnlyDischarge,
}

impl TryFrom<i64> for FlagStop {
    type Error = DomainError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::Undefined),
            0 => Ok(Self::Normal),
            1 => Ok(Self::PickupAndDischarge),
            2 => Ok(Self::OnlyDischarge),
            other => Err(DomainError::unknown_code(
                "flagstop",
                "-1 (UNDEFINED), 0 (NORMAL), 1 (PICKUP_AND_DISCHARGE), or 2 (ONLY_DISCHARGE)",
                other,
            )),
        }
    }
}

impl<'de> Deserialize<'de> for FlagStop {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        integer_code(deserializer)
    }
}

/// Kind of pattern point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointType {
    /// A stop
    #[serde(rename = "S")]
    Stop,
    /// A waypoint along the route
    #[serde(rename = "W")]
    Waypoint,
}

/// Service bulletin priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BulletinPriority {
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
}

/// Detour state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DetourState {
    /// Canceled detour
    Canceled,
    /// Active detour
    Active,
}

impl TryFrom<i64> for DetourState {
    type Error = DomainError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Canceled),
            1 => Ok(Self::Active),
            other => Err(DomainError::unknown_code("st", "0 (canceled) or 1 (active)", other)),
        }
    }
}

impl<'de> Deserialize<'de> for DetourState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        integer_code(deserializer)
    }
}
