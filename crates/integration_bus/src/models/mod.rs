//! Typed Bus Tracker payloads
//!
//! Each `*Response` type is the content of the `bustime-response` wrapper
//! for one endpoint. Field rules are enforced during deserialization, so a
//! record that violates them surfaces as a schema validation error.

mod bulletins;
mod codes;
mod detours;
mod error;
mod patterns;
mod predictions;
mod routes;
mod stops;
mod system;
mod vehicles;

use domain::ApiResponse;
use domain::de::{parse_number, scalar_text};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use bulletins::{ServiceAffected, ServiceBulletin, ServiceBulletinsResponse};
pub use codes::{
    BulletinPriority, Countdown, DetourState, DynamicAction, FlagStop, PassengerLoad, PointType,
    PredictionType, StopStatus, TransportMode,
};
pub use detours::{Detour, DetoursResponse, RouteDirection};
pub use error::{BusApiError, ErrorMessage};
pub use patterns::{DetourPoint, Pattern, PatternPoint, PatternsResponse};
pub use predictions::{Prediction, PredictionsResponse};
pub use routes::{Direction, DirectionsResponse, Route, RoutesResponse};
pub use stops::{Stop, StopsResponse};
pub use system::{
    AgenciesResponse, Agency, Locale, LocalesResponse, RtpiDataFeed, RtpiDataFeedsResponse,
    TimeResponse,
};
pub use vehicles::{Vehicle, VehiclesResponse};

/// Success payload or API error payload of one Bus Tracker call
pub type BusResponse<T> = ApiResponse<T, BusApiError>;

/// Seconds in a service day; scheduled starts past midnight stay within it
const SECONDS_PER_DAY: u32 = 86_400;

fn checked_start(raw: &Value) -> Result<u32, String> {
    let secs: i64 = parse_number(raw)?;
    u32::try_from(secs)
        .ok()
        .filter(|s| *s <= SECONDS_PER_DAY)
        .ok_or_else(|| format!("stst must be between 0 and {SECONDS_PER_DAY} seconds, got: {secs}"))
}

/// Scheduled trip start in seconds past midnight (`stst`)
pub(crate) fn scheduled_start<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    checked_start(&raw).map_err(D::Error::custom)
}

/// Optional `stst`; null and `""` read as absent
pub(crate) fn optional_scheduled_start<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    match scalar_text(&raw) {
        None if raw.is_null() => Ok(None),
        Some(text) if text.is_empty() => Ok(None),
        _ => checked_start(&raw).map(Some).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scheduled_start_bounds() {
        assert_eq!(checked_start(&json!(0)), Ok(0));
        assert_eq!(checked_start(&json!("86400")), Ok(86_400));
        assert!(checked_start(&json!(86_401)).is_err());
        assert!(checked_start(&json!(-1)).is_err());
        assert!(checked_start(&json!("noon")).is_err());
    }

    #[test]
    fn optional_scheduled_start_blank() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "optional_scheduled_start")]
            stst: Option<u32>,
        }
        let blank: Probe = serde_json::from_value(json!({"stst": ""})).unwrap();
        let null: Probe = serde_json::from_value(json!({"stst": null})).unwrap();
        let missing: Probe = serde_json::from_value(json!({})).unwrap();
        let set: Probe = serde_json::from_value(json!({"stst": 300})).unwrap();
        assert_eq!(blank.stst, None);
        assert_eq!(null.stst, None);
        assert_eq!(missing.stst, None);
        assert_eq!(set.stst, Some(300));
    }
}
