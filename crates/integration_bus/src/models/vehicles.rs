//! Vehicle positions

use chrono::{NaiveDate, NaiveDateTime};
use domain::de;
use domain::{Heading, Latitude, Longitude};
use serde::{Deserialize, Serialize};

use super::codes::{PassengerLoad, StopStatus, TransportMode};
use super::scheduled_start;

/// Real-time data for one vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle id (bus number)
    #[serde(rename = "vid")]
    pub id: String,
    /// Data feed name (multi-feed only)
    #[serde(rename = "rtpidatafeed", default)]
    pub data_feed: Option<String>,
    /// Time of the last position update
    #[serde(rename = "tmstmp", deserialize_with = "de::bus_timestamp")]
    pub timestamp: NaiveDateTime,
    /// Latitude
    pub lat: Latitude,
    /// Longitude
    pub lon: Longitude,
    /// Heading
    #[serde(rename = "hdg")]
    pub heading: Heading,
    /// Pattern currently being executed
    #[serde(rename = "pid", deserialize_with = "de::number")]
    pub pattern_id: u32,
    /// Feet travelled into the current pattern
    #[serde(rename = "pdist", deserialize_with = "de::non_negative")]
    pub pattern_distance: u32,
    /// Route currently being executed
    #[serde(rename = "rt")]
    pub route: String,
    /// Destination of the current trip
    #[serde(rename = "des")]
    pub destination: String,
    /// Set when the vehicle is delayed
    #[serde(rename = "dly", default)]
    pub delayed: Option<bool>,
    /// Speed in miles per hour
    #[serde(rename = "spd", default, deserialize_with = "de::optional_non_negative")]
    pub speed_mph: Option<u32>,
    /// Scheduled block id
    #[serde(rename = "tablockid")]
    pub block_id: String,
    /// Scheduled trip id
    #[serde(rename = "tatripid")]
    pub trip_id: String,
    /// Trip id from the scheduling system
    #[serde(rename = "origtatripno")]
    pub original_trip_number: String,
    /// Zone the vehicle is in, if any
    #[serde(default, deserialize_with = "de::empty_as_none")]
    pub zone: Option<String>,
    /// Transportation mode
    pub mode: TransportMode,
    /// Passenger load
    #[serde(rename = "psgld")]
    pub passenger_load: PassengerLoad,
    /// Timepoint id of the current stop (GTFS)
    #[serde(rename = "timepointid", default, deserialize_with = "de::optional_text")]
    pub timepoint_id: Option<String>,
    /// Sequence number of the current stop (GTFS)
    #[serde(default, deserialize_with = "de::optional_number")]
    pub sequence: Option<u32>,
    /// GTFS stop status
    #[serde(rename = "stopstatus", default)]
    pub stop_status: Option<StopStatus>,
    /// Stop id of the current stop (GTFS)
    #[serde(rename = "stopid", default, deserialize_with = "de::optional_text")]
    pub stop_id: Option<String>,
    /// GTFS stop sequence of the current stop
    #[serde(rename = "gtfsseq", default, deserialize_with = "de::optional_non_negative")]
    pub gtfs_sequence: Option<u32>,
    /// Scheduled trip start, seconds past midnight
    #[serde(rename = "stst", deserialize_with = "scheduled_start")]
    pub scheduled_start_secs: u32,
    /// Scheduled trip start date
    #[serde(rename = "stsd", deserialize_with = "de::service_date")]
    pub scheduled_start_date: NaiveDate,
}

impl Vehicle {
    /// True if the vehicle reported a delay
    #[must_use]
    pub fn is_delayed(&self) -> bool {
        self.delayed.unwrap_or(false)
    }
}

/// `getvehicles` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclesResponse {
    /// Matching vehicles
    #[serde(rename = "vehicle")]
    pub vehicles: Vec<Vehicle>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn vehicle_json() -> Value {
        json!({
            "vid": "1234",
            "tmstmp": "20250717 22:47",
            "lat": "41.88069",
            "lon": "-87.62978",
            "hdg": "89",
            "pid": 4521,
            "pdist": 1200,
            "rt": "20",
            "des": "Austin",
            "dly": false,
            "spd": 14,
            "tablockid": "20 -701",
            "tatripid": "1010101",
            "origtatripno": "259023185",
            "zone": "",
            "mode": 1,
            "psgld": "HALF_EMPTY",
            "stst": 81000,
            "stsd": "2025-07-17"
        })
    }

    #[test]
    fn parses_documented_vehicle() {
        let vehicle: Vehicle = serde_json::from_value(vehicle_json()).unwrap();
        assert_eq!(vehicle.id, "1234");
        assert_eq!(vehicle.heading.degrees(), 89);
        assert!((vehicle.lat.degrees() - 41.88069).abs() < 1e-9);
        assert_eq!(vehicle.mode, TransportMode::Bus);
        assert_eq!(vehicle.passenger_load, PassengerLoad::HalfEmpty);
        assert!(vehicle.zone.is_none());
        assert!(!vehicle.is_delayed());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        for (field, value) in [
            ("lat", json!("91.0")),
            ("lon", json!("-181")),
            ("hdg", json!("361")),
            ("pdist", json!(-1)),
            ("spd", json!(-3)),
            ("mode", json!(7)),
            ("psgld", json!("")),
            ("stst", json!(86401)),
            ("stsd", json!("07/17/2025")),
            ("tmstmp", json!("2025-07-17 22:47")),
            ("stopstatus", json!(3)),
        ] {
            let mut raw = vehicle_json();
            raw[field] = value;
            assert!(
                serde_json::from_value::<Vehicle>(raw).is_err(),
                "{field} should be rejected"
            );
        }
    }

    #[test]
    fn non_numeric_coordinate_fails() {
        let mut raw = vehicle_json();
        raw["lat"] = json!("north");
        let err = serde_json::from_value::<Vehicle>(raw).unwrap_err();
        assert!(err.to_string().contains("valid decimal number"));
    }
}
