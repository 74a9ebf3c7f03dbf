//! Timestamp parsing for the tracker APIs
//!
//! The bus API documents a fixed-width `YYYYMMDD HH:MM[:SS]` form. The train
//! API documents the same form but actually answers with ISO 8601 local
//! date-times, so both are accepted there.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::DomainError;

/// Fixed-width format with seconds (`20250717 22:47:33`)
pub const TRACKER_FORMAT: &str = "%Y%m%d %H:%M:%S";

/// Fixed-width format without seconds (`20250717 22:47`)
pub const TRACKER_FORMAT_MINUTES: &str = "%Y%m%d %H:%M";

const ISO_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a bus timestamp in either the seconds or minutes resolution
///
/// # Errors
///
/// Returns `InvalidTimestamp` if neither resolution matches.
pub fn parse_bus_timestamp(text: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(text, TRACKER_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, TRACKER_FORMAT_MINUTES))
        .map_err(|_| DomainError::InvalidTimestamp {
            value: text.to_string(),
            expected: "YYYYMMDD HH:MM or YYYYMMDD HH:MM:SS",
        })
}

/// Parse a timestamp strictly in `YYYYMMDD HH:MM:SS` form
///
/// # Errors
///
/// Returns `InvalidTimestamp` on any other shape.
pub fn parse_tracker_seconds(text: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(text, TRACKER_FORMAT).map_err(|_| DomainError::InvalidTimestamp {
        value: text.to_string(),
        expected: "YYYYMMDD HH:MM:SS",
    })
}

/// Parse a train timestamp: ISO 8601 first, then the documented form
///
/// An explicit UTC offset is accepted and dropped; the API reports local
/// (Chicago) time.
///
/// # Errors
///
/// Returns `InvalidTimestamp` if no accepted format matches.
pub fn parse_train_timestamp(text: &str) -> Result<NaiveDateTime, DomainError> {
    ISO_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.naive_local()))
        .or_else(|| NaiveDateTime::parse_from_str(text, TRACKER_FORMAT).ok())
        .ok_or_else(|| DomainError::InvalidTimestamp {
            value: text.to_string(),
            expected: "ISO format (YYYY-MM-DDTHH:MM:SS) or YYYYMMDD HH:MM:SS",
        })
}

/// Parse a service date in `yyyy-mm-dd` form
///
/// # Errors
///
/// Returns `InvalidDate` on any other shape.
pub fn parse_service_date(text: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| DomainError::InvalidDate(text.to_string()))
}

/// Convert epoch milliseconds (as returned with `unixTime=true`) to UTC
///
/// # Errors
///
/// Returns `InvalidTimestamp` if the value is out of chrono's range.
pub fn from_epoch_millis(millis: i64) -> Result<NaiveDateTime, DomainError> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| DomainError::InvalidTimestamp {
            value: millis.to_string(),
            expected: "milliseconds since the Unix epoch",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn bus_timestamp_with_seconds() {
        let ts = parse_bus_timestamp("20250717 22:47:33").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 7, 17));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (22, 47, 33));
    }

    #[test]
    fn bus_timestamp_with_minutes() {
        let ts = parse_bus_timestamp("20250717 22:47").unwrap();
        assert_eq!(ts.second(), 0);
    }

    #[test]
    fn bus_timestamp_rejects_iso() {
        assert!(parse_bus_timestamp("2025-07-17T22:47:33").is_err());
    }

    #[test]
    fn strict_seconds_rejects_minutes() {
        assert!(parse_tracker_seconds("20250717 22:47").is_err());
        assert!(parse_tracker_seconds("20250717 22:47:01").is_ok());
    }

    #[test]
    fn train_timestamp_iso_and_documented() {
        let iso = parse_train_timestamp("2025-07-17T22:47:33").unwrap();
        let documented = parse_train_timestamp("20250717 22:47:33").unwrap();
        assert_eq!(iso, documented);
        assert!(parse_train_timestamp("2025-07-17 22:47:33").is_ok());
        assert!(parse_train_timestamp("2025-07-17T22:47:33-05:00").is_ok());
        assert!(parse_train_timestamp("yesterday").is_err());
    }

    #[test]
    fn service_date() {
        assert!(parse_service_date("2025-07-17").is_ok());
        assert!(parse_service_date("20250717").is_err());
    }

    #[test]
    fn epoch_millis() {
        let ts = from_epoch_millis(1_752_792_453_000).unwrap();
        assert_eq!(ts.year(), 2025);
    }
}
