//! Arrival predictions and followed trains

use chrono::NaiveDateTime;
use domain::de;
use domain::{Heading, Latitude, Longitude};
use serde::{Deserialize, Serialize};

use super::lines::{TrainDirection, TrainLine};
use crate::ids::{StationId, StopId};

/// One arrival prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrival {
    /// Parent station id
    #[serde(rename = "staId")]
    pub station_id: StationId,
    /// Platform id
    #[serde(rename = "stpId")]
    pub stop_id: StopId,
    /// Parent station name
    #[serde(rename = "staNm")]
    pub station_name: String,
    /// Platform description (e.g. "Service toward Howard")
    #[serde(rename = "stpDe")]
    pub stop_description: String,
    /// Run number
    #[serde(rename = "rn")]
    pub run_number: String,
    /// Route code (e.g. "Red", "Brn")
    #[serde(rename = "rt")]
    pub route: String,
    /// Stop id where the run ends
    #[serde(rename = "destSt")]
    pub destination_stop: String,
    /// Destination description
    #[serde(rename = "destNm")]
    pub destination_name: String,
    /// Direction code
    #[serde(rename = "trDr")]
    pub direction_code: String,
    /// When the prediction was generated
    #[serde(rename = "prdt", deserialize_with = "de::train_timestamp")]
    pub predicted_at: NaiveDateTime,
    /// Expected arrival or departure
    #[serde(rename = "arrT", deserialize_with = "de::train_timestamp")]
    pub arrival_at: NaiveDateTime,
    /// Approaching or due
    #[serde(rename = "isApp", deserialize_with = "de::flag")]
    pub approaching: bool,
    /// Schedule-based rather than live
    #[serde(rename = "isSch", deserialize_with = "de::flag")]
    pub scheduled: bool,
    /// A potential fault was detected
    #[serde(rename = "isFlt", deserialize_with = "de::flag")]
    pub fault: bool,
    /// Considered delayed
    #[serde(rename = "isDly", deserialize_with = "de::flag")]
    pub delayed: bool,
    /// Train flags (not in use)
    #[serde(default, deserialize_with = "de::optional_text")]
    pub flags: Option<String>,
    /// Latitude, when known
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub lat: Option<Latitude>,
    /// Longitude, when known
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub lon: Option<Longitude>,
    /// Heading, when known
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub heading: Option<Heading>,
}

impl Arrival {
    /// True if the train is approaching or due
    #[must_use]
    pub const fn is_approaching(&self) -> bool {
        self.approaching
    }

    /// True if the prediction comes from the schedule
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// True if the train is delayed
    #[must_use]
    pub const fn is_delayed(&self) -> bool {
        self.delayed
    }

    /// True if a potential fault was detected
    #[must_use]
    pub const fn has_fault(&self) -> bool {
        self.fault
    }

    /// Line, if the route code is known
    #[must_use]
    pub fn line(&self) -> Option<TrainLine> {
        TrainLine::from_code(&self.route)
    }

    /// Direction, if the code is known
    #[must_use]
    pub fn direction(&self) -> Option<TrainDirection> {
        TrainDirection::from_code(&self.direction_code)
    }
}

/// `ttarrivals` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalsResponse {
    /// When the response was generated
    #[serde(rename = "tmst", deserialize_with = "de::train_timestamp")]
    pub generated_at: NaiveDateTime,
    /// Predictions
    #[serde(rename = "eta", default, deserialize_with = "de::one_or_many")]
    pub arrivals: Vec<Arrival>,
}

/// Current position of a followed train; every field may be blank
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub lat: Option<Latitude>,
    /// Longitude
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub lon: Option<Longitude>,
    /// Heading
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub heading: Option<Heading>,
}

/// `ttfollow` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowResponse {
    /// When the response was generated
    #[serde(rename = "tmst", deserialize_with = "de::train_timestamp")]
    pub generated_at: NaiveDateTime,
    /// Position of the followed train
    #[serde(default)]
    pub position: Option<Position>,
    /// Upcoming stops of the run
    #[serde(rename = "eta", default, deserialize_with = "de::one_or_many")]
    pub arrivals: Vec<Arrival>,
}
