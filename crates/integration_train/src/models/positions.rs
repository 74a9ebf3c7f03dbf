//! Train positions by line

use chrono::NaiveDateTime;
use domain::de;
use domain::{Heading, Latitude, Longitude};
use serde::{Deserialize, Serialize};

use super::lines::{TrainDirection, TrainLine};

/// A train in service and its next stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    /// Run number
    #[serde(rename = "rn")]
    pub run_number: String,
    /// Stop id where the run ends
    #[serde(rename = "destSt")]
    pub destination_stop: String,
    /// Destination description
    #[serde(rename = "destNm")]
    pub destination_name: String,
    /// Direction code
    #[serde(rename = "trDr")]
    pub direction_code: String,
    /// Next parent station id
    #[serde(rename = "nextStaId")]
    pub next_station_id: String,
    /// Next platform id
    #[serde(rename = "nextStpId")]
    pub next_stop_id: String,
    /// Next station name
    #[serde(rename = "nextStaNm")]
    pub next_station_name: String,
    /// When the prediction was generated
    #[serde(rename = "prdt", deserialize_with = "de::train_timestamp")]
    pub predicted_at: NaiveDateTime,
    /// Expected arrival at the next station
    #[serde(rename = "arrT", deserialize_with = "de::train_timestamp")]
    pub arrival_at: NaiveDateTime,
    /// Approaching or due
    #[serde(rename = "isApp", deserialize_with = "de::flag")]
    pub approaching: bool,
    /// Considered delayed
    #[serde(rename = "isDly", deserialize_with = "de::flag")]
    pub delayed: bool,
    /// Train flags (not in use)
    #[serde(default, deserialize_with = "de::optional_text")]
    pub flags: Option<String>,
    /// Latitude
    pub lat: Latitude,
    /// Longitude
    pub lon: Longitude,
    /// Heading
    pub heading: Heading,
}

impl Train {
    /// True if the train is approaching its next station
    #[must_use]
    pub const fn is_approaching(&self) -> bool {
        self.approaching
    }

    /// True if the train is delayed
    #[must_use]
    pub const fn is_delayed(&self) -> bool {
        self.delayed
    }

    /// Direction, if the code is known
    #[must_use]
    pub fn direction(&self) -> Option<TrainDirection> {
        TrainDirection::from_code(&self.direction_code)
    }
}

/// Trains on one line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePositions {
    /// Route code as sent (lower case, e.g. "red")
    #[serde(rename = "@name")]
    pub name: String,
    /// Trains in service
    #[serde(rename = "train", default, deserialize_with = "de::one_or_many")]
    pub trains: Vec<Train>,
}

impl RoutePositions {
    /// Line, if the route code is known
    #[must_use]
    pub fn line(&self) -> Option<TrainLine> {
        TrainLine::from_code(&self.name)
    }
}

/// `ttpositions` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionsResponse {
    /// When the response was generated
    #[serde(rename = "tmst", deserialize_with = "de::train_timestamp")]
    pub generated_at: NaiveDateTime,
    /// One group per requested line
    #[serde(rename = "route", default, deserialize_with = "de::one_or_many")]
    pub routes: Vec<RoutePositions>,
}
