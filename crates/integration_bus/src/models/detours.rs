//! Detours

use domain::de;
use serde::{Deserialize, Serialize};

use super::codes::DetourState;

/// A route and direction affected by a detour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDirection {
    /// Route designator
    #[serde(rename = "rt")]
    pub route: String,
    /// Direction id
    #[serde(rename = "dir")]
    pub direction: String,
}

/// A detour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detour {
    /// Detour id, referenced by other calls
    pub id: String,
    /// Version; only the newest version is returned
    #[serde(rename = "ver", deserialize_with = "de::positive")]
    pub version: u32,
    /// Active or canceled
    #[serde(rename = "st")]
    pub state: DetourState,
    /// Description
    #[serde(rename = "desc")]
    pub description: String,
    /// Affected routes and directions
    #[serde(rename = "rtdirs", default, deserialize_with = "de::null_as_empty")]
    pub route_directions: Vec<RouteDirection>,
    /// Start date and time, as sent
    #[serde(rename = "startdt")]
    pub start: String,
    /// End date and time, as sent
    #[serde(rename = "enddt")]
    pub end: String,
    /// Data feed name (multi-feed only)
    #[serde(rename = "rtpidatafeed", default)]
    pub data_feed: Option<String>,
}

impl Detour {
    /// True if the detour is in effect
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == DetourState::Active
    }
}

/// `getdetours` payload; missing or null lists read as empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetoursResponse {
    /// Detours
    #[serde(rename = "dtr", default, deserialize_with = "de::null_as_empty")]
    pub detours: Vec<Detour>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_detour() {
        let response: DetoursResponse = serde_json::from_value(json!({
            "dtr": [{
                "id": "1842",
                "ver": 3,
                "st": 1,
                "desc": "Madison reroute",
                "rtdirs": [{"rt": "20", "dir": "Eastbound"}],
                "startdt": "20250701 05:00",
                "enddt": "20250801 05:00"
            }]
        }))
        .unwrap();
        assert!(response.detours[0].is_active());
        assert_eq!(response.detours[0].route_directions[0].route, "20");
    }

    #[test]
    fn missing_or_null_list_is_empty() {
        let missing: DetoursResponse = serde_json::from_value(json!({})).unwrap();
        let null: DetoursResponse = serde_json::from_value(json!({"dtr": null})).unwrap();
        assert!(missing.detours.is_empty());
        assert!(null.detours.is_empty());
    }

    #[test]
    fn state_and_version_rules() {
        let base = json!({
            "id": "1", "ver": 1, "st": 0, "desc": "", "rtdirs": [],
            "startdt": "", "enddt": ""
        });
        assert!(serde_json::from_value::<Detour>(base.clone()).is_ok());

        let mut bad_state = base.clone();
        bad_state["st"] = json!(2);
        assert!(serde_json::from_value::<Detour>(bad_state).is_err());

        let mut bad_version = base;
        bad_version["ver"] = json!(0);
        assert!(serde_json::from_value::<Detour>(bad_version).is_err());
    }
}
