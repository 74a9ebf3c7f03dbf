//! Train Tracker API subroutes

use std::fmt;

/// One documented Train Tracker endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainEndpoint {
    /// Arrival predictions for a station or platform
    Arrivals,
    /// Upcoming stops of one train run
    Follow,
    /// Train positions on one or more lines
    Positions,
}

impl TrainEndpoint {
    /// Every endpoint
    pub const ALL: [Self; 3] = [Self::Arrivals, Self::Follow, Self::Positions];

    /// Subroute below the versioned base URL
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arrivals => "ttarrivals.aspx",
            Self::Follow => "ttfollow.aspx",
            Self::Positions => "ttpositions.aspx",
        }
    }
}

impl fmt::Display for TrainEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subroutes_are_aspx_pages() {
        for endpoint in TrainEndpoint::ALL {
            assert!(endpoint.as_str().starts_with("tt"));
            assert!(endpoint.to_string().ends_with(".aspx"));
        }
    }
}
