//! Bus Tracker API subroutes

use std::fmt;

/// One documented Bus Tracker endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusEndpoint {
    /// Server time
    Time,
    /// Real-time passenger information feeds
    RtpiDataFeeds,
    /// Vehicle positions
    Vehicles,
    /// Route list
    Routes,
    /// Directions for a route
    Directions,
    /// Stops by route and direction, or by id
    Stops,
    /// Geo-positional route patterns
    Patterns,
    /// Arrival and departure predictions
    Predictions,
    /// Service bulletins
    ServiceBulletins,
    /// Supported locales
    LocaleList,
    /// Route detours
    Detours,
    /// Agencies
    Agencies,
}

impl BusEndpoint {
    /// Every endpoint, in documentation order
    pub const ALL: [Self; 12] = [
        Self::Time,
        Self::RtpiDataFeeds,
        Self::Vehicles,
        Self::Routes,
        Self::Directions,
        Self::Stops,
        Self::Patterns,
        Self::Predictions,
        Self::ServiceBulletins,
        Self::LocaleList,
        Self::Detours,
        Self::Agencies,
    ];

    /// Subroute appended to the versioned base URL
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "gettime",
            Self::RtpiDataFeeds => "getrtpidatafeeds",
            Self::Vehicles => "getvehicles",
            Self::Routes => "getroutes",
            Self::Directions => "getdirections",
            Self::Stops => "getstops",
            Self::Patterns => "getpatterns",
            Self::Predictions => "getpredictions",
            Self::ServiceBulletins => "getservicebulletins",
            Self::LocaleList => "getlocalelist",
            Self::Detours => "getdetours",
            Self::Agencies => "getagencies",
        }
    }
}

impl fmt::Display for BusEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
