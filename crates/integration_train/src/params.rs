//! Request arguments and parameter validation
//!
//! Validators clone the tracker's base parameters and add the call-specific
//! keys. They never touch the network and are shared by the blocking and
//! async trackers. Empty strings count as absent.

use domain::{IdList, QueryParams, TrackerError};

use crate::endpoint::TrainEndpoint;
use crate::ids::{StationId, StopId};

/// Arguments for `ttarrivals`: exactly one of `mapid` or `stpid`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrivalsRequest {
    /// Parent station id, five digits in the 4xxxx range
    pub mapid: Option<String>,
    /// Platform id, five digits in the 3xxxx range
    pub stpid: Option<String>,
    /// Maximum number of results; must be positive when given
    pub max: Option<u32>,
    /// Line filter, passed through unvalidated
    pub rt: Option<String>,
}

impl ArrivalsRequest {
    /// Arrivals for every platform of a station
    pub fn by_station(mapid: impl Into<String>) -> Self {
        Self {
            mapid: Some(mapid.into()),
            ..Self::default()
        }
    }

    /// Arrivals for one platform
    pub fn by_stop(stpid: impl Into<String>) -> Self {
        Self {
            stpid: Some(stpid.into()),
            ..Self::default()
        }
    }

    /// Limit the number of results
    #[must_use]
    pub const fn with_max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    /// Restrict to one line
    #[must_use]
    pub fn with_route(mut self, rt: impl Into<String>) -> Self {
        self.rt = Some(rt.into());
        self
    }
}

/// One call: endpoint plus arguments
#[derive(Debug, Clone, Copy)]
pub enum TrainCall<'a> {
    /// `ttarrivals`
    Arrivals(&'a ArrivalsRequest),
    /// `ttfollow`
    Follow {
        /// Run number of the train
        runnumber: &'a str,
    },
    /// `ttpositions`
    Positions {
        /// One or more line codes
        rt: &'a IdList,
    },
}

impl TrainCall<'_> {
    /// Endpoint this call targets
    #[must_use]
    pub const fn endpoint(&self) -> TrainEndpoint {
        match self {
            Self::Arrivals(_) => TrainEndpoint::Arrivals,
            Self::Follow { .. } => TrainEndpoint::Follow,
            Self::Positions { .. } => TrainEndpoint::Positions,
        }
    }

    /// Validate the arguments and build the full parameter set
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the violated rule.
    pub fn params(&self, base: &QueryParams) -> Result<QueryParams, TrackerError> {
        match *self {
            Self::Arrivals(request) => arrivals_params(base, request),
            Self::Follow { runnumber } => follow_params(base, runnumber),
            Self::Positions { rt } => positions_params(base, rt),
        }
    }
}

fn given(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// `ttarrivals`
///
/// # Errors
///
/// Fails unless exactly one of `mapid`/`stpid` is given in its documented
/// id range, or if `max` is zero.
pub fn arrivals_params(base: &QueryParams, request: &ArrivalsRequest) -> Result<QueryParams, TrackerError> {
    let mut params = base.clone();

    match (given(request.mapid.as_deref()), given(request.stpid.as_deref())) {
        (None, None) => return Err(TrackerError::invalid_argument("either mapid or stpid required")),
        (Some(_), Some(_)) => {
            return Err(TrackerError::invalid_argument("either mapid or stpid required, not both"));
        },
        (Some(mapid), None) => {
            let mapid = StationId::parse(mapid).map_err(|_| {
                TrackerError::invalid_argument("mapid must be a 5-digit number in the 4xxxx range")
            })?;
            params.insert("mapid", mapid.as_str());
        },
        (None, Some(stpid)) => {
            let stpid = StopId::parse(stpid).map_err(|_| {
                TrackerError::invalid_argument("stpid must be a 5-digit number in the 3xxxx range")
            })?;
            params.insert("stpid", stpid.as_str());
        },
    }

    if let Some(max) = request.max {
        if max == 0 {
            return Err(TrackerError::invalid_argument("max must be a positive integer"));
        }
        params.insert("max", max.to_string());
    }

    params.insert_opt("rt", given(request.rt.as_deref()));
    Ok(params)
}

/// `ttfollow`
///
/// # Errors
///
/// Fails if `runnumber` is empty.
pub fn follow_params(base: &QueryParams, runnumber: &str) -> Result<QueryParams, TrackerError> {
    let Some(runnumber) = given(Some(runnumber)) else {
        return Err(TrackerError::invalid_argument("runnumber required"));
    };
    let mut params = base.clone();
    params.insert("runnumber", runnumber);
    Ok(params)
}

/// `ttpositions`: any number of lines, comma-joined
///
/// # Errors
///
/// Fails if no line is given.
pub fn positions_params(base: &QueryParams, rt: &IdList) -> Result<QueryParams, TrackerError> {
    if rt.is_empty() {
        return Err(TrackerError::invalid_argument("at least one rt required"));
    }
    let mut params = base.clone();
    params.insert("rt", rt.joined());
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> QueryParams {
        QueryParams::new().with("key", "k").with("outputType", "JSON")
    }

    fn rejected(result: Result<QueryParams, TrackerError>, needle: &str) {
        match result {
            Err(TrackerError::InvalidArgument(message)) => {
                assert!(message.contains(needle), "{message:?} should mention {needle:?}");
            },
            other => panic!("expected argument error, got {other:?}"),
        }
    }

    mod arrivals_tests {
        use super::*;

        #[test]
        fn station_id_is_added() {
            let params = arrivals_params(&base(), &ArrivalsRequest::by_station("40380")).unwrap();
            assert_eq!(params.get("mapid"), Some("40380"));
            assert_eq!(params.get("key"), Some("k"));
            assert!(!params.contains("stpid"));
        }

        #[test]
        fn four_digit_station_is_rejected() {
            rejected(
                arrivals_params(&base(), &ArrivalsRequest::by_station("1234")),
                "mapid",
            );
        }

        #[test]
        fn stop_id_range() {
            assert!(arrivals_params(&base(), &ArrivalsRequest::by_stop("30070")).is_ok());
            rejected(
                arrivals_params(&base(), &ArrivalsRequest::by_stop("40070")),
                "stpid",
            );
        }

        #[test]
        fn exactly_one_id() {
            rejected(arrivals_params(&base(), &ArrivalsRequest::default()), "either");
            let both = ArrivalsRequest {
                stpid: Some("30070".to_string()),
                ..ArrivalsRequest::by_station("40380")
            };
            rejected(arrivals_params(&base(), &both), "not both");
        }

        #[test]
        fn empty_id_counts_as_absent() {
            let request = ArrivalsRequest {
                mapid: Some(String::new()),
                ..ArrivalsRequest::by_stop("30070")
            };
            assert!(arrivals_params(&base(), &request).is_ok());
        }

        #[test]
        fn max_must_be_positive() {
            rejected(
                arrivals_params(&base(), &ArrivalsRequest::by_station("40380").with_max(0)),
                "max",
            );
            let params =
                arrivals_params(&base(), &ArrivalsRequest::by_station("40380").with_max(3)).unwrap();
            assert_eq!(params.get("max"), Some("3"));
        }

        #[test]
        fn route_is_passed_through() {
            let request = ArrivalsRequest::by_station("40380").with_route("Red");
            let params = arrivals_params(&base(), &request).unwrap();
            assert_eq!(params.get("rt"), Some("Red"));
        }

        #[test]
        fn base_is_not_modified() {
            let base = base();
            let _ = arrivals_params(&base, &ArrivalsRequest::by_station("40380")).unwrap();
            assert_eq!(base.len(), 2);
        }
    }

    mod follow_tests {
        use super::*;

        #[test]
        fn run_number_required() {
            rejected(follow_params(&base(), ""), "runnumber");
            let params = follow_params(&base(), "830").unwrap();
            assert_eq!(params.get("runnumber"), Some("830"));
        }
    }

    mod positions_tests {
        use super::*;

        #[test]
        fn list_is_joined_without_cap() {
            let lines: Vec<&str> = vec!["Red", "Blue", "Brn", "G", "Org", "P", "Pink", "Y", "Red", "Blue", "G"];
            let params = positions_params(&base(), &IdList::from(lines)).unwrap();
            assert_eq!(
                params.get("rt"),
                Some("Red,Blue,Brn,G,Org,P,Pink,Y,Red,Blue,G")
            );
        }

        #[test]
        fn single_string_is_kept() {
            let params = positions_params(&base(), &IdList::from("red,blue")).unwrap();
            assert_eq!(params.get("rt"), Some("red,blue"));
        }

        #[test]
        fn empty_is_rejected() {
            rejected(positions_params(&base(), &IdList::from("")), "rt");
            rejected(positions_params(&base(), &IdList::from(Vec::<String>::new())), "rt");
        }
    }

    #[test]
    fn call_dispatches_to_validator() {
        let rt = IdList::from("Red");
        let call = TrainCall::Positions { rt: &rt };
        assert_eq!(call.endpoint(), TrainEndpoint::Positions);
        assert_eq!(call.params(&base()).unwrap().get("rt"), Some("Red"));
    }
}
