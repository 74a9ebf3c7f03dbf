//! Routes and directions

use domain::{HexColor, de};
use serde::{Deserialize, Serialize};

/// A bus route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Route designator (e.g. "20" or "X20")
    #[serde(rename = "rt")]
    pub id: String,
    /// Common name (e.g. "Madison")
    #[serde(rename = "rtnm")]
    pub name: String,
    /// Map line colour
    #[serde(rename = "rtclr")]
    pub color: HexColor,
    /// Language-specific designator for display
    #[serde(rename = "rtdd")]
    pub display_designator: String,
    /// Data feed name (multi-feed only)
    #[serde(rename = "rtpidatafeed", default)]
    pub data_feed: Option<String>,
}

/// `getroutes` payload
///
/// The list is sent as `routes` or `route` depending on the server version.
/// Both keys are accepted, a `null` counts as empty and the lists are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRoutes")]
pub struct RoutesResponse {
    /// Available routes
    pub routes: Vec<Route>,
}

#[derive(Deserialize)]
struct RawRoutes {
    #[serde(default, deserialize_with = "de::null_as_empty")]
    routes: Vec<Route>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    route: Vec<Route>,
}

impl From<RawRoutes> for RoutesResponse {
    fn from(raw: RawRoutes) -> Self {
        let mut routes = raw.routes;
        routes.extend(raw.route);
        Self { routes }
    }
}

/// A direction of travel on a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    /// Direction id to pass to other calls (e.g. "Eastbound")
    pub id: String,
    /// Locale-dependent display name
    pub name: String,
}

/// `getdirections` payload
///
/// The list is sent as `directions` or `dir` depending on the server version,
/// with the same merging as [`RoutesResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDirections")]
pub struct DirectionsResponse {
    /// Available directions
    pub directions: Vec<Direction>,
}

#[derive(Deserialize)]
struct RawDirections {
    #[serde(default, deserialize_with = "de::null_as_empty")]
    directions: Vec<Direction>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    dir: Vec<Direction>,
}

impl From<RawDirections> for DirectionsResponse {
    fn from(raw: RawDirections) -> Self {
        let mut directions = raw.directions;
        directions.extend(raw.dir);
        Self { directions }
    }
}
