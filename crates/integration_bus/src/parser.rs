//! Bus Tracker response envelope parsing
//!
//! Every Bus Tracker payload is wrapped in a `bustime-response` object. An
//! `error` key inside the wrapper marks an API-level failure, which is
//! returned as [`ApiResponse::Failure`] instead of an `Err`.

use domain::{ApiResponse, TrackerError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::models::{BusApiError, BusResponse};

/// Key wrapping every Bus Tracker payload
pub const BUS_WRAPPER_KEY: &str = "bustime-response";

/// Unwrap and type a raw Bus Tracker response
///
/// # Errors
///
/// Returns `SchemaValidation` if the wrapper is missing or the content does
/// not match `T` (or the error payload shape).
pub fn parse_bus_response<T>(raw: Value) -> Result<BusResponse<T>, TrackerError>
where
    T: DeserializeOwned,
{
    let Value::Object(mut envelope) = raw else {
        return Err(TrackerError::SchemaValidation(format!(
            "expected a JSON object wrapped in {BUS_WRAPPER_KEY:?}"
        )));
    };

    let body = envelope.remove(BUS_WRAPPER_KEY).ok_or_else(|| {
        TrackerError::SchemaValidation(format!("missing {BUS_WRAPPER_KEY:?} wrapper"))
    })?;

    if body.get("error").is_some() {
        let error: BusApiError = serde_json::from_value(body)?;
        warn!(error = %error, "Bus Tracker returned an error payload");
        return Ok(ApiResponse::Failure(error));
    }

    Ok(ApiResponse::Success(serde_json::from_value(body)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DetoursResponse, RoutesResponse, TimeResponse};
    use serde_json::json;

    #[test]
    fn success_payload_is_typed() {
        let raw = json!({"bustime-response": {
            "routes": [{"rt": "20", "rtnm": "Madison", "rtclr": "#336633", "rtdd": "20"}]
        }});
        let parsed = parse_bus_response::<RoutesResponse>(raw).unwrap();
        let routes = parsed.success().unwrap();
        assert_eq!(routes.routes[0].name, "Madison");
    }

    #[test]
    fn error_key_yields_failure_variant() {
        let raw = json!({"bustime-response": {
            "error": [{"rt": "999", "msg": "No data found for parameter"}]
        }});
        let parsed = parse_bus_response::<RoutesResponse>(raw).unwrap();
        let error = parsed.failure().unwrap();
        assert_eq!(error.error[0].msg, "No data found for parameter");
    }

    #[test]
    fn error_wins_over_partial_payload() {
        let raw = json!({"bustime-response": {
            "vehicle": [],
            "error": [{"msg": "No data found for parameter"}]
        }});
        let parsed = parse_bus_response::<RoutesResponse>(raw).unwrap();
        assert!(parsed.is_failure());
    }

    #[test]
    fn missing_wrapper_is_schema_error() {
        let err = parse_bus_response::<TimeResponse>(json!({"tm": "20250717 22:47:33"})).unwrap_err();
        assert!(matches!(err, TrackerError::SchemaValidation(_)));

        let err = parse_bus_response::<TimeResponse>(json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, TrackerError::SchemaValidation(_)));
    }

    #[test]
    fn field_rule_violation_is_schema_error() {
        let raw = json!({"bustime-response": {"tm": "17/07/2025"}});
        let err = parse_bus_response::<TimeResponse>(raw).unwrap_err();
        assert!(matches!(err, TrackerError::SchemaValidation(_)));
    }

    #[test]
    fn empty_detours_payload_is_success() {
        let parsed = parse_bus_response::<DetoursResponse>(json!({"bustime-response": {}})).unwrap();
        assert_eq!(parsed.success().unwrap().detours.len(), 0);
    }
}
