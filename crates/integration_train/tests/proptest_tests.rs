//! Property-based tests for station/stop ids and arrivals validation

use domain::{QueryParams, TrackerError};
use integration_train::params::arrivals_params;
use integration_train::{ArrivalsRequest, StationId, StopId};
use proptest::prelude::*;

fn base() -> QueryParams {
    QueryParams::new().with("key", "k").with("outputType", "JSON")
}

proptest! {
    #[test]
    fn station_ids_in_range_accepted(id in "4[0-9]{4}") {
        let parsed = StationId::parse(&id).unwrap();
        prop_assert_eq!(parsed.as_str(), id.as_str());
        prop_assert!(StopId::parse(&id).is_err());
    }

    #[test]
    fn stop_ids_in_range_accepted(id in "3[0-9]{4}") {
        let parsed = StopId::parse(&id).unwrap();
        prop_assert_eq!(parsed.as_str(), id.as_str());
        prop_assert!(StationId::parse(&id).is_err());
    }

    #[test]
    fn wrong_length_rejected(id in "4[0-9]{0,3}|4[0-9]{5,8}") {
        prop_assert!(StationId::parse(&id).is_err());
    }

    #[test]
    fn station_request_forwards_mapid(id in "4[0-9]{4}", max in 1u32..100) {
        let params = arrivals_params(&base(), &ArrivalsRequest::by_station(id.clone()).with_max(max)).unwrap();
        prop_assert_eq!(params.get("mapid"), Some(id.as_str()));
        let expected_max = max.to_string();
        prop_assert_eq!(params.get("max"), Some(expected_max.as_str()));
        prop_assert!(!params.contains("stpid"));
    }

    #[test]
    fn out_of_range_stop_rejected(id in "[0-24-9][0-9]{4}") {
        let err = arrivals_params(&base(), &ArrivalsRequest::by_stop(id)).unwrap_err();
        prop_assert!(matches!(err, TrackerError::InvalidArgument(_)));
    }
}
