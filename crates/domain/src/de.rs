//! Serde field helpers for loosely typed tracker payloads
//!
//! Both APIs are inconsistent about scalar encoding: the same field may be
//! a JSON number in one response and a numeric string in another, and
//! absent values are sometimes sent as `""`. These helpers are used through
//! `#[serde(deserialize_with = "...")]` and report rule violations as serde
//! custom errors, which callers see as schema validation failures.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::value_objects::timestamp::{
    parse_bus_timestamp, parse_service_date, parse_tracker_seconds, parse_train_timestamp,
};

/// Text form of a JSON scalar, trimmed; `None` for arrays, objects and null
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a number that may be sent as a JSON number or numeric string
///
/// # Errors
///
/// Returns a message describing the rejected value.
pub fn parse_number<T>(value: &Value) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    let text = scalar_text(value).ok_or_else(|| format!("expected a number, got: {value}"))?;
    text.parse::<T>()
        .map_err(|e| format!("invalid number {text:?}: {e}"))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Required number, as JSON number or numeric string
pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Value::deserialize(deserializer)?;
    parse_number(&raw).map_err(D::Error::custom)
}

/// Optional number; null and `""` become `None`
pub fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Value::deserialize(deserializer)?;
    if is_blank(&raw) {
        return Ok(None);
    }
    parse_number(&raw).map(Some).map_err(D::Error::custom)
}

fn checked_integer<T>(raw: &Value, valid: fn(i64) -> bool, rule: &str) -> Result<T, String>
where
    T: TryFrom<i64>,
{
    let value: i64 = parse_number(raw)?;
    if !valid(value) {
        return Err(format!("value must be {rule}, got: {value}"));
    }
    T::try_from(value).map_err(|_| format!("value out of range: {value}"))
}

/// Required integer that must be zero or greater
pub fn non_negative<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw = Value::deserialize(deserializer)?;
    checked_integer(&raw, |v| v >= 0, "non-negative").map_err(D::Error::custom)
}

/// Optional integer that must be zero or greater when present
pub fn optional_non_negative<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw = Value::deserialize(deserializer)?;
    if is_blank(&raw) {
        return Ok(None);
    }
    checked_integer(&raw, |v| v >= 0, "non-negative")
        .map(Some)
        .map_err(D::Error::custom)
}

/// Required integer that must be strictly positive
pub fn positive<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw = Value::deserialize(deserializer)?;
    checked_integer(&raw, |v| v > 0, "positive").map_err(D::Error::custom)
}

/// Optional integer that must be strictly positive when present
pub fn optional_positive<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw = Value::deserialize(deserializer)?;
    if is_blank(&raw) {
        return Ok(None);
    }
    checked_integer(&raw, |v| v > 0, "positive")
        .map(Some)
        .map_err(D::Error::custom)
}

/// Required float that must be zero or greater
pub fn non_negative_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let value: f64 = parse_number(&raw).map_err(D::Error::custom)?;
    if value < 0.0 || value.is_nan() {
        return Err(D::Error::custom(format!(
            "value must be non-negative, got: {value}"
        )));
    }
    Ok(value)
}

/// Required float that must be strictly positive
pub fn positive_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let value: f64 = parse_number(&raw).map_err(D::Error::custom)?;
    if value <= 0.0 || value.is_nan() {
        return Err(D::Error::custom(format!("value must be positive, got: {value}")));
    }
    Ok(value)
}

/// `"1"`/`"0"` flag (also accepts JSON booleans and 1/0)
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    match scalar_text(&raw).as_deref() {
        Some("1" | "true") => Ok(true),
        Some("0" | "false") => Ok(false),
        _ => Err(D::Error::custom(format!("flag must be \"1\" or \"0\", got: {raw}"))),
    }
}

/// Boolean that tolerates string spellings: true/1/yes/on are true,
/// any other scalar is false
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.to_lowercase().as_str(), "true" | "1" | "yes" | "on"),
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    })
}

/// Optional string where `""` means absent
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Optional identifier sent as text or number; null and `""` mean absent
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    if is_blank(&raw) {
        return Ok(None);
    }
    scalar_text(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected text, got: {raw}")))
}

/// Optional value where null and `""` mean absent
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    if is_blank(&raw) {
        return Ok(None);
    }
    serde_json::from_value(raw).map(Some).map_err(D::Error::custom)
}

/// A list that may be sent as a single object; null becomes empty
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    match raw {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => serde_json::from_value(raw).map_err(D::Error::custom),
        other => serde_json::from_value(other)
            .map(|item| vec![item])
            .map_err(D::Error::custom),
    }
}

/// A list where null means empty
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Bus timestamp, `YYYYMMDD HH:MM[:SS]`
pub fn bus_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_bus_timestamp(&text).map_err(D::Error::custom)
}

/// Optional `YYYYMMDD HH:MM:SS` timestamp; `""` means absent
pub fn optional_tracker_seconds<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_as_none(deserializer)? {
        Some(text) => parse_tracker_seconds(&text).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

/// Train timestamp, ISO 8601 or `YYYYMMDD HH:MM:SS`
pub fn train_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_train_timestamp(&text).map_err(D::Error::custom)
}

/// Service date, `yyyy-mm-dd`
pub fn service_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_service_date(&text).map_err(D::Error::custom)
}

/// Optional service date; `""` means absent
pub fn optional_service_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_as_none(deserializer)? {
        Some(text) => parse_service_date(&text).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}
