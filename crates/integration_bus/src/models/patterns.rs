//! Route patterns

use domain::de;
use domain::{Latitude, Longitude};
use serde::{Deserialize, Serialize};

use super::codes::PointType;

/// One geo-positional point of a pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPoint {
    /// Position in the sequence of points
    #[serde(rename = "seq", deserialize_with = "de::non_negative")]
    pub sequence: u32,
    /// Stop or waypoint
    #[serde(rename = "typ")]
    pub kind: PointType,
    /// Stop id, for stop points
    #[serde(rename = "stpid", default, deserialize_with = "de::optional_text")]
    pub stop_id: Option<String>,
    /// Stop name, for stop points
    #[serde(rename = "stpnm", default, deserialize_with = "de::empty_as_none")]
    pub stop_name: Option<String>,
    /// Feet into the pattern
    #[serde(rename = "pdist", deserialize_with = "de::non_negative_float")]
    pub distance: f64,
    /// Latitude
    pub lat: Latitude,
    /// Longitude
    pub lon: Longitude,
}

impl PatternPoint {
    /// True for stop points
    #[must_use]
    pub fn is_stop(&self) -> bool {
        self.kind == PointType::Stop
    }
}

/// Points of the original pattern a detour replaced
pub type DetourPoint = PatternPoint;

/// A route pattern: the ordered points that draw one trip shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Pattern id
    #[serde(rename = "pid", deserialize_with = "de::positive")]
    pub id: u32,
    /// Pattern length in feet
    #[serde(rename = "ln", deserialize_with = "de::positive_float")]
    pub length: f64,
    /// Direction (matches `getdirections` ids)
    #[serde(rename = "rtdir")]
    pub direction: String,
    /// Points in sequence order
    #[serde(rename = "pt")]
    pub points: Vec<PatternPoint>,
    /// Detour id, for patterns created by a detour
    #[serde(rename = "dtrid", default, deserialize_with = "de::optional_text")]
    pub detour_id: Option<String>,
    /// Original pattern points, for patterns created by a detour
    #[serde(rename = "dtrpt", default, deserialize_with = "de::null_as_empty")]
    pub detour_points: Vec<DetourPoint>,
}

impl Pattern {
    /// Points that are stops
    pub fn stops(&self) -> impl Iterator<Item = &PatternPoint> {
        self.points.iter().filter(|p| p.is_stop())
    }

    /// True if a detour created this pattern
    #[must_use]
    pub fn is_detour(&self) -> bool {
        self.detour_id.is_some()
    }
}

/// `getpatterns` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternsResponse {
    /// Matching patterns
    #[serde(rename = "ptr")]
    pub patterns: Vec<Pattern>,
}
