//! Service bulletins

use chrono::NaiveDateTime;
use domain::de;
use serde::{Deserialize, Serialize};

use super::codes::BulletinPriority;

/// A route, direction and/or stop a bulletin applies to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAffected {
    /// Route designator
    #[serde(rename = "rt", default, deserialize_with = "de::optional_text")]
    pub route: Option<String>,
    /// Route direction
    #[serde(rename = "rtdir", default, deserialize_with = "de::empty_as_none")]
    pub direction: Option<String>,
    /// Stop id
    #[serde(rename = "stpid", default, deserialize_with = "de::optional_text")]
    pub stop_id: Option<String>,
    /// Stop name
    #[serde(rename = "stpnm", default, deserialize_with = "de::empty_as_none")]
    pub stop_name: Option<String>,
}

/// A service bulletin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBulletin {
    /// Unique bulletin name
    #[serde(rename = "nm")]
    pub name: String,
    /// Subject line
    #[serde(rename = "sbj")]
    pub subject: String,
    /// Full text
    #[serde(rename = "dtl")]
    pub detail: String,
    /// Short text alternative
    #[serde(rename = "brf")]
    pub brief: String,
    /// Cause
    #[serde(rename = "cse", default, deserialize_with = "de::empty_as_none")]
    pub cause: Option<String>,
    /// Effect
    #[serde(rename = "efct", default, deserialize_with = "de::empty_as_none")]
    pub effect: Option<String>,
    /// Priority
    #[serde(rename = "prty")]
    pub priority: BulletinPriority,
    /// Affected data feed; absent means the whole system
    #[serde(rename = "rtpidatafeed", default, deserialize_with = "de::empty_as_none")]
    pub data_feed: Option<String>,
    /// Affected services; empty means every route and stop of the feed
    #[serde(rename = "srvc", default, deserialize_with = "de::one_or_many")]
    pub services: Vec<ServiceAffected>,
    /// Last modification, local time
    #[serde(rename = "mod", default, deserialize_with = "de::optional_tracker_seconds")]
    pub modified: Option<NaiveDateTime>,
    /// Link to more information
    #[serde(default, deserialize_with = "de::empty_as_none")]
    pub url: Option<String>,
}

/// `getservicebulletins` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBulletinsResponse {
    /// Matching bulletins
    #[serde(rename = "sb")]
    pub bulletins: Vec<ServiceBulletin>,
}
