//! System-level responses: time, data feeds, agencies and locales

use chrono::NaiveDateTime;
use domain::de::{self, scalar_text};
use domain::value_objects::timestamp::{from_epoch_millis, parse_tracker_seconds};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `gettime` sends `YYYYMMDD HH:MM:SS` by default and epoch milliseconds
/// when `unixTime=true` was requested
fn system_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let text = scalar_text(&raw)
        .ok_or_else(|| D::Error::custom(format!("Time must be a string or number, got: {raw}")))?;
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        let millis: i64 = text.parse().map_err(D::Error::custom)?;
        return from_epoch_millis(millis).map_err(D::Error::custom);
    }
    parse_tracker_seconds(&text).map_err(D::Error::custom)
}

/// `gettime` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeResponse {
    /// Current system time (local time, or UTC when requested as epoch)
    #[serde(rename = "tm", deserialize_with = "system_time")]
    pub time: NaiveDateTime,
}

/// A real-time passenger information data feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtpiDataFeed {
    /// Feed designator, used as the `rtpidatafeed` parameter elsewhere
    pub name: String,
    /// Origin of the information
    pub source: String,
    /// Agency served by this feed
    #[serde(rename = "displayname")]
    pub display_name: String,
    /// Feed is enabled
    #[serde(deserialize_with = "de::lenient_bool")]
    pub enabled: bool,
    /// Feed may be shown to the public
    #[serde(deserialize_with = "de::lenient_bool")]
    pub visible: bool,
}

/// `getrtpidatafeeds` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtpiDataFeedsResponse {
    /// Configured feeds
    #[serde(rename = "rtpidatafeeds")]
    pub feeds: Vec<RtpiDataFeed>,
}

/// An agency imported in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    /// GTFS agency id; not necessarily unique
    #[serde(rename = "agencyid", default, deserialize_with = "de::optional_positive")]
    pub id: Option<u32>,
    /// Short name, unique per agency
    #[serde(rename = "shortname")]
    pub short_name: String,
    /// Long name
    #[serde(rename = "longname")]
    pub long_name: String,
}

/// `getagencies` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgenciesResponse {
    /// Agencies
    #[serde(rename = "agency")]
    pub agencies: Vec<Agency>,
}

/// A supported locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Language code, usable as the `locale` parameter
    #[serde(rename = "localestring")]
    pub code: String,
    /// Human-readable name
    #[serde(rename = "displayname")]
    pub display_name: String,
}

/// `getlocalelist` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalesResponse {
    /// Locales
    #[serde(rename = "locale")]
    pub locales: Vec<Locale>,
}
