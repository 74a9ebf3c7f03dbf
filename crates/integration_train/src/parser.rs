//! Train Tracker response envelope parsing
//!
//! Every Train Tracker payload is wrapped in a `ctatt` object carrying an
//! `errCd` code. Any code other than `"0"` marks an API-level failure,
//! returned as [`ApiResponse::Failure`]; a missing code counts as `"0"`.

use domain::de::scalar_text;
use domain::{ApiResponse, TrackerError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::models::{TrainApiError, TrainResponse};

/// Key wrapping every Train Tracker payload
pub const TRAIN_WRAPPER_KEY: &str = "ctatt";

/// Code reported on success
const SUCCESS_CODE: &str = "0";

/// Unwrap and type a raw Train Tracker response
///
/// # Errors
///
/// Returns `SchemaValidation` if the wrapper is missing, `errCd` is not a
/// scalar, or the content does not match `T`.
pub fn parse_train_response<T>(raw: Value) -> Result<TrainResponse<T>, TrackerError>
where
    T: DeserializeOwned,
{
    let Value::Object(mut envelope) = raw else {
        return Err(TrackerError::SchemaValidation(format!(
            "expected a JSON object wrapped in {TRAIN_WRAPPER_KEY:?}"
        )));
    };

    let body = envelope.remove(TRAIN_WRAPPER_KEY).ok_or_else(|| {
        TrackerError::SchemaValidation(format!("missing {TRAIN_WRAPPER_KEY:?} wrapper"))
    })?;

    let code = match body.get("errCd") {
        None | Some(Value::Null) => SUCCESS_CODE.to_string(),
        Some(value) => scalar_text(value).ok_or_else(|| {
            TrackerError::SchemaValidation(format!("errCd must be a string or number, got: {value}"))
        })?,
    };

    if code != SUCCESS_CODE {
        let message = body.get("errNm").and_then(scalar_text).filter(|m| !m.is_empty());
        let error = TrainApiError::new(code, message);
        warn!(code = %error.code, message = %error.message, "Train Tracker returned an error payload");
        return Ok(ApiResponse::Failure(error));
    }

    Ok(ApiResponse::Success(serde_json::from_value(body)?))
}
