//! Arrival and departure predictions

use chrono::{NaiveDate, NaiveDateTime};
use domain::de;
use serde::{Deserialize, Serialize};

use super::codes::{Countdown, DynamicAction, FlagStop, PassengerLoad, PredictionType, tolerant_passenger_load};
use super::optional_scheduled_start;

/// One predicted arrival or departure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// When the prediction was generated
    #[serde(rename = "tmstmp", deserialize_with = "de::bus_timestamp")]
    pub generated_at: NaiveDateTime,
    /// Arrival or departure
    #[serde(rename = "typ")]
    pub kind: PredictionType,
    /// Stop id
    #[serde(rename = "stpid")]
    pub stop_id: String,
    /// Stop display name
    #[serde(rename = "stpnm")]
    pub stop_name: String,
    /// Vehicle id
    #[serde(rename = "vid")]
    pub vehicle_id: String,
    /// Feet left before the vehicle reaches the stop
    #[serde(rename = "dstp", deserialize_with = "de::non_negative")]
    pub distance_to_stop: u32,
    /// Route designator
    #[serde(rename = "rt")]
    pub route: String,
    /// Language-specific route designator for display
    #[serde(rename = "rtdd")]
    pub route_display: String,
    /// Direction of travel (matches `getdirections` ids)
    #[serde(rename = "rtdir")]
    pub direction: String,
    /// Final destination of the vehicle
    #[serde(rename = "des")]
    pub destination: String,
    /// Predicted arrival or departure time
    #[serde(rename = "prdtm", deserialize_with = "de::bus_timestamp")]
    pub predicted_at: NaiveDateTime,
    /// Set when the vehicle is delayed
    #[serde(rename = "dly", default)]
    pub delayed: Option<bool>,
    /// Dynamic action affecting this prediction
    #[serde(rename = "dyn", default)]
    pub dynamic_action: Option<DynamicAction>,
    /// Scheduled block id
    #[serde(rename = "tablockid")]
    pub block_id: String,
    /// Scheduled trip id
    #[serde(rename = "tatripid")]
    pub trip_id: String,
    /// Trip id from the scheduling system
    #[serde(rename = "origtatripno")]
    pub original_trip_number: String,
    /// Minutes until arrival
    #[serde(rename = "prdctdn")]
    pub countdown: Countdown,
    /// Zone the vehicle is in, if any
    #[serde(default, deserialize_with = "de::empty_as_none")]
    pub zone: Option<String>,
    /// Minutes until the next scheduled bus after a service gap
    #[serde(rename = "nbus", default, deserialize_with = "de::optional_non_negative")]
    pub next_bus_minutes: Option<u32>,
    /// Passenger load; unknown or empty values read as `N/A`
    #[serde(rename = "psgld", default, deserialize_with = "tolerant_passenger_load")]
    pub passenger_load: Option<PassengerLoad>,
    /// GTFS stop sequence
    #[serde(rename = "gtfsseq", default, deserialize_with = "de::optional_non_negative")]
    pub gtfs_sequence: Option<u32>,
    /// Scheduled trip start, seconds past midnight
    #[serde(rename = "stst", default, deserialize_with = "optional_scheduled_start")]
    pub scheduled_start_secs: Option<u32>,
    /// Scheduled trip start date
    #[serde(rename = "stsd", default, deserialize_with = "de::optional_service_date")]
    pub scheduled_start_date: Option<NaiveDate>,
    /// Flag-stop information
    #[serde(rename = "flagstop", default)]
    pub flag_stop: Option<FlagStop>,
}

impl Prediction {
    /// True if the bus is due now
    #[must_use]
    pub fn is_due(&self) -> bool {
        self.countdown == Countdown::Due
    }

    /// True if the trip was canceled by a dynamic action
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.dynamic_action.is_some_and(DynamicAction::is_cancellation)
    }
}

/// `getpredictions` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionsResponse {
    /// Predictions, soonest first
    #[serde(rename = "prd")]
    pub predictions: Vec<Prediction>,
}
