//! Stops

use domain::de;
use domain::{Latitude, Longitude};
use serde::{Deserialize, Serialize};

/// A bus stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Stop id
    #[serde(rename = "stpid")]
    pub id: String,
    /// Display name (e.g. "Madison and Clark")
    #[serde(rename = "stpnm")]
    pub name: String,
    /// Latitude
    pub lat: Latitude,
    /// Longitude
    pub lon: Longitude,
    /// Detours that temporarily add this stop
    #[serde(rename = "dtradd", default, deserialize_with = "de::null_as_empty")]
    pub detours_added: Vec<String>,
    /// Detours that bypass this stop
    #[serde(rename = "dtrrem", default, deserialize_with = "de::null_as_empty")]
    pub detours_removed: Vec<String>,
    /// GTFS stop sequence (only with route and direction)
    #[serde(rename = "gtfsseq", default, deserialize_with = "de::optional_non_negative")]
    pub gtfs_sequence: Option<u32>,
    /// ADA accessibility, when supplied by the agency
    #[serde(default)]
    pub ada: Option<bool>,
}

/// `getstops` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopsResponse {
    /// Matching stops
    pub stops: Vec<Stop>,
}
