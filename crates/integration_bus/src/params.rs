//! Request arguments and parameter validation
//!
//! Every endpoint's argument rules are enforced here, before any request is
//! built. Validators take the tracker's base parameters, clone them, and add
//! the call-specific keys; they never touch the network, so the blocking and
//! async trackers share them unchanged.
//!
//! Empty strings and empty identifier lists count as absent.

use domain::{IdList, MAX_IDENTIFIERS, QueryParams, TrackerError};

use crate::endpoint::BusEndpoint;

/// Resolution of timestamps in vehicle and prediction responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeResolution {
    /// `YYYYMMDD HH:MM:SS`
    #[default]
    Seconds,
    /// `YYYYMMDD HH:MM`
    Minutes,
}

impl TimeResolution {
    /// Value of the `tmres` parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Minutes => "m",
        }
    }
}

/// Arguments for `getvehicles`: exactly one of `vid` or `rt`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehiclesRequest {
    /// Up to 10 vehicle ids
    pub vid: Option<IdList>,
    /// Up to 10 route designators
    pub rt: Option<IdList>,
    /// Timestamp resolution
    pub tmres: TimeResolution,
}

impl VehiclesRequest {
    /// Vehicles by id
    pub fn by_vehicle(vid: impl Into<IdList>) -> Self {
        Self {
            vid: Some(vid.into()),
            ..Self::default()
        }
    }

    /// Vehicles on one or more routes
    pub fn by_route(rt: impl Into<IdList>) -> Self {
        Self {
            rt: Some(rt.into()),
            ..Self::default()
        }
    }

    /// Set the timestamp resolution
    #[must_use]
    pub fn with_tmres(mut self, tmres: TimeResolution) -> Self {
        self.tmres = tmres;
        self
    }
}

/// Arguments for `getstops`: `rt` with `dir`, or `stpid` alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopsRequest {
    /// A single route designator
    pub rt: Option<String>,
    /// Direction id as returned by `getdirections`
    pub dir: Option<String>,
    /// Up to 10 stop ids
    pub stpid: Option<IdList>,
}

impl StopsRequest {
    /// Stops served by a route in one direction
    pub fn for_route(rt: impl Into<String>, dir: impl Into<String>) -> Self {
        Self {
            rt: Some(rt.into()),
            dir: Some(dir.into()),
            stpid: None,
        }
    }

    /// Stops by id
    pub fn by_stop(stpid: impl Into<IdList>) -> Self {
        Self {
            stpid: Some(stpid.into()),
            ..Self::default()
        }
    }
}

/// Arguments for `getpatterns`: exactly one of `pid` or `rt`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternsRequest {
    /// Up to 10 pattern ids
    pub pid: Option<IdList>,
    /// Up to 10 route designators
    pub rt: Option<IdList>,
}

impl PatternsRequest {
    /// Patterns by id
    pub fn by_pattern(pid: impl Into<IdList>) -> Self {
        Self {
            pid: Some(pid.into()),
            rt: None,
        }
    }

    /// Patterns of one or more routes
    pub fn by_route(rt: impl Into<IdList>) -> Self {
        Self {
            pid: None,
            rt: Some(rt.into()),
        }
    }
}

/// Arguments for `getpredictions`: exactly one of `stpid` or `vid`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionsRequest {
    /// Up to 10 stop ids
    pub stpid: Option<IdList>,
    /// Route filter, only valid with `stpid`
    pub rt: Option<IdList>,
    /// Up to 10 vehicle ids
    pub vid: Option<IdList>,
    /// Maximum number of predictions; zero means no limit
    pub top: Option<u32>,
    /// Timestamp resolution
    pub tmres: TimeResolution,
}

impl PredictionsRequest {
    /// Predictions for stops
    pub fn by_stop(stpid: impl Into<IdList>) -> Self {
        Self {
            stpid: Some(stpid.into()),
            ..Self::default()
        }
    }

    /// Predictions for vehicles
    pub fn by_vehicle(vid: impl Into<IdList>) -> Self {
        Self {
            vid: Some(vid.into()),
            ..Self::default()
        }
    }

    /// Restrict stop predictions to routes
    #[must_use]
    pub fn with_route(mut self, rt: impl Into<IdList>) -> Self {
        self.rt = Some(rt.into());
        self
    }

    /// Limit the number of predictions
    #[must_use]
    pub const fn with_top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    /// Set the timestamp resolution
    #[must_use]
    pub const fn with_tmres(mut self, tmres: TimeResolution) -> Self {
        self.tmres = tmres;
        self
    }
}

/// Arguments for `getservicebulletins`: exactly one of `rt` or `stpid`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceBulletinsRequest {
    /// Up to 10 route designators; only one when `rtdir` is given
    pub rt: Option<IdList>,
    /// Route direction, only used with `rt`
    pub rtdir: Option<String>,
    /// Up to 10 stop ids
    pub stpid: Option<IdList>,
}

impl ServiceBulletinsRequest {
    /// Bulletins for routes
    pub fn by_route(rt: impl Into<IdList>) -> Self {
        Self {
            rt: Some(rt.into()),
            ..Self::default()
        }
    }

    /// Bulletins for stops
    pub fn by_stop(stpid: impl Into<IdList>) -> Self {
        Self {
            stpid: Some(stpid.into()),
            ..Self::default()
        }
    }

    /// Restrict a single-route request to one direction
    #[must_use]
    pub fn with_direction(mut self, rtdir: impl Into<String>) -> Self {
        self.rtdir = Some(rtdir.into());
        self
    }
}

/// Arguments for `getdetours`; all optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetoursRequest {
    /// A single route designator
    pub rt: Option<String>,
    /// Route direction, only used with `rt`
    pub rtdir: Option<String>,
    /// Data feed name (multi-feed systems)
    pub rtpidatafeed: Option<String>,
}

impl DetoursRequest {
    /// All active detours
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Detours of one route
    pub fn for_route(rt: impl Into<String>) -> Self {
        Self {
            rt: Some(rt.into()),
            ..Self::default()
        }
    }

    /// Restrict a route request to one direction
    #[must_use]
    pub fn with_direction(mut self, rtdir: impl Into<String>) -> Self {
        self.rtdir = Some(rtdir.into());
        self
    }

    /// Select a data feed
    #[must_use]
    pub fn with_data_feed(mut self, feed: impl Into<String>) -> Self {
        self.rtpidatafeed = Some(feed.into());
        self
    }
}

/// One validated-on-demand call: endpoint plus arguments
#[derive(Debug, Clone, Copy)]
pub enum BusCall<'a> {
    /// `gettime`
    Time {
        /// Ask for epoch milliseconds instead of local time text
        unix_time: bool,
    },
    /// `getrtpidatafeeds`
    RtpiDataFeeds,
    /// `getvehicles`
    Vehicles(&'a VehiclesRequest),
    /// `getroutes`
    Routes,
    /// `getdirections`
    Directions {
        /// A single route designator
        rt: &'a str,
    },
    /// `getstops`
    Stops(&'a StopsRequest),
    /// `getpatterns`
    Patterns(&'a PatternsRequest),
    /// `getpredictions`
    Predictions(&'a PredictionsRequest),
    /// `getservicebulletins`
    ServiceBulletins(&'a ServiceBulletinsRequest),
    /// `getlocalelist`
    LocaleList {
        /// Show locale names in their own language
        in_locale_language: bool,
    },
    /// `getdetours`
    Detours(&'a DetoursRequest),
    /// `getagencies`
    Agencies,
}

impl BusCall<'_> {
    /// Endpoint this call targets
    #[must_use]
    pub const fn endpoint(&self) -> BusEndpoint {
        match self {
            Self::Time { .. } => BusEndpoint::Time,
            Self::RtpiDataFeeds => BusEndpoint::RtpiDataFeeds,
            Self::Vehicles(_) => BusEndpoint::Vehicles,
            Self::Routes => BusEndpoint::Routes,
            Self::Directions { .. } => BusEndpoint::Directions,
            Self::Stops(_) => BusEndpoint::Stops,
            Self::Patterns(_) => BusEndpoint::Patterns,
            Self::Predictions(_) => BusEndpoint::Predictions,
            Self::ServiceBulletins(_) => BusEndpoint::ServiceBulletins,
            Self::LocaleList { .. } => BusEndpoint::LocaleList,
            Self::Detours(_) => BusEndpoint::Detours,
            Self::Agencies => BusEndpoint::Agencies,
        }
    }

    /// Validate the arguments and build the full parameter set
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the violated rule.
    pub fn params(&self, base: &QueryParams) -> Result<QueryParams, TrackerError> {
        match *self {
            Self::Time { unix_time } => Ok(time_params(base, unix_time)),
            Self::RtpiDataFeeds | Self::Routes | Self::Agencies => Ok(base.clone()),
            Self::Vehicles(request) => vehicles_params(base, request),
            Self::Directions { rt } => directions_params(base, rt),
            Self::Stops(request) => stops_params(base, request),
            Self::Patterns(request) => patterns_params(base, request),
            Self::Predictions(request) => predictions_params(base, request),
            Self::ServiceBulletins(request) => service_bulletins_params(base, request),
            Self::LocaleList { in_locale_language } => Ok(locale_list_params(base, in_locale_language)),
            Self::Detours(request) => detours_params(base, request),
        }
    }
}

fn given(ids: Option<&IdList>) -> Option<&IdList> {
    ids.filter(|ids| !ids.is_empty())
}

fn given_str(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Comma-joined ids, rejecting more than [`MAX_IDENTIFIERS`]
fn capped(name: &str, ids: &IdList) -> Result<String, TrackerError> {
    let count = ids.count();
    if count > MAX_IDENTIFIERS {
        return Err(TrackerError::invalid_argument(format!(
            "at most {MAX_IDENTIFIERS} identifiers allowed for {name}, got {count}"
        )));
    }
    Ok(ids.joined())
}

fn single_route(rt: &str) -> Result<(), TrackerError> {
    if rt.split(',').count() > 1 {
        return Err(TrackerError::invalid_argument(format!(
            "only one rt allowed, got: {rt}"
        )));
    }
    Ok(())
}

/// `gettime`: adds `unixTime` only when requested
#[must_use]
pub fn time_params(base: &QueryParams, unix_time: bool) -> QueryParams {
    let mut params = base.clone();
    if unix_time {
        params.insert_bool("unixTime", true);
    }
    params
}

/// `getlocalelist`: adds `inLocaleLanguage` only when requested
#[must_use]
pub fn locale_list_params(base: &QueryParams, in_locale_language: bool) -> QueryParams {
    let mut params = base.clone();
    if in_locale_language {
        params.insert_bool("inLocaleLanguage", true);
    }
    params
}

/// `getvehicles`
///
/// # Errors
///
/// Fails unless exactly one of `vid`/`rt` is given with at most 10 ids.
pub fn vehicles_params(base: &QueryParams, request: &VehiclesRequest) -> Result<QueryParams, TrackerError> {
    let mut params = base.clone();
    params.insert("tmres", request.tmres.as_str());

    match (given(request.vid.as_ref()), given(request.rt.as_ref())) {
        (Some(vid), None) => params.insert("vid", capped("vid", vid)?),
        (None, Some(rt)) => params.insert("rt", capped("rt", rt)?),
        _ => return Err(TrackerError::invalid_argument("exactly one of vid or rt required")),
    }

    Ok(params)
}

/// `getdirections`
///
/// # Errors
///
/// Fails unless exactly one route is given.
pub fn directions_params(base: &QueryParams, rt: &str) -> Result<QueryParams, TrackerError> {
    let Some(rt) = given_str(Some(rt)) else {
        return Err(TrackerError::invalid_argument("rt required"));
    };
    single_route(rt)?;

    let mut params = base.clone();
    params.insert("rt", rt);
    Ok(params)
}

/// `getstops`
///
/// # Errors
///
/// Fails unless either `stpid` alone (at most 10 ids) or a single `rt`
/// together with `dir` is given.
pub fn stops_params(base: &QueryParams, request: &StopsRequest) -> Result<QueryParams, TrackerError> {
    let rt = given_str(request.rt.as_deref());
    let dir = given_str(request.dir.as_deref());
    let stpid = given(request.stpid.as_ref());

    let mut params = base.clone();
    match (rt, dir, stpid) {
        (None, None, None) => {
            return Err(TrackerError::invalid_argument(
                "either rt and dir, or up to 10 stpid required",
            ));
        },
        (None, None, Some(stpid)) => params.insert("stpid", capped("stpid", stpid)?),
        (_, _, Some(_)) => {
            return Err(TrackerError::invalid_argument("stpid not allowed with rt or dir"));
        },
        (Some(rt), dir, None) => {
            single_route(rt)?;
            let Some(dir) = dir else {
                return Err(TrackerError::invalid_argument("dir required when rt provided"));
            };
            params.insert("rt", rt);
            params.insert("dir", dir);
        },
        (None, Some(_), None) => {
            return Err(TrackerError::invalid_argument("rt required when dir provided"));
        },
    }

    Ok(params)
}

/// `getpatterns`
///
/// # Errors
///
/// Fails unless exactly one of `pid`/`rt` is given with at most 10 ids.
pub fn patterns_params(base: &QueryParams, request: &PatternsRequest) -> Result<QueryParams, TrackerError> {
    let mut params = base.clone();
    match (given(request.pid.as_ref()), given(request.rt.as_ref())) {
        (Some(pid), None) => params.insert("pid", capped("pid", pid)?),
        (None, Some(rt)) => params.insert("rt", capped("rt", rt)?),
        _ => return Err(TrackerError::invalid_argument("exactly one of pid or rt required")),
    }
    Ok(params)
}

/// `getpredictions`
///
/// # Errors
///
/// Fails unless exactly one of `stpid`/`vid` is given with at most 10 ids,
/// or if `rt` accompanies `vid`.
pub fn predictions_params(
    base: &QueryParams,
    request: &PredictionsRequest,
) -> Result<QueryParams, TrackerError> {
    let rt = given(request.rt.as_ref());

    let mut params = base.clone();
    match (given(request.stpid.as_ref()), given(request.vid.as_ref())) {
        (Some(stpid), None) => {
            params.insert("stpid", capped("stpid", stpid)?);
            if let Some(rt) = rt {
                params.insert("rt", rt.joined());
            }
        },
        (None, Some(vid)) => {
            if rt.is_some() {
                return Err(TrackerError::invalid_argument("rt not allowed with vid"));
            }
            params.insert("vid", capped("vid", vid)?);
        },
        _ => return Err(TrackerError::invalid_argument("exactly one of stpid or vid required")),
    }

    if let Some(top) = request.top.filter(|top| *top > 0) {
        params.insert("top", top.to_string());
    }
    params.insert("tmres", request.tmres.as_str());

    Ok(params)
}

/// `getservicebulletins`
///
/// `rtdir` is ignored when only `stpid` is given.
///
/// # Errors
///
/// Fails unless exactly one of `rt`/`stpid` is given with at most 10 ids,
/// or if `rtdir` accompanies more than one route.
pub fn service_bulletins_params(
    base: &QueryParams,
    request: &ServiceBulletinsRequest,
) -> Result<QueryParams, TrackerError> {
    let mut params = base.clone();
    match (given(request.rt.as_ref()), given(request.stpid.as_ref())) {
        (Some(rt), None) => {
            if let Some(rtdir) = given_str(request.rtdir.as_deref()) {
                if !rt.is_single() {
                    return Err(TrackerError::invalid_argument(
                        "only one rt allowed when rtdir provided",
                    ));
                }
                params.insert("rtdir", rtdir);
            }
            params.insert("rt", capped("rt", rt)?);
        },
        (None, Some(stpid)) => params.insert("stpid", capped("stpid", stpid)?),
        _ => return Err(TrackerError::invalid_argument("exactly one of rt or stpid required")),
    }
    Ok(params)
}

/// `getdetours`
///
/// `rtdir` is only sent together with `rt`.
///
/// # Errors
///
/// Fails if `rt` names more than one route.
pub fn detours_params(base: &QueryParams, request: &DetoursRequest) -> Result<QueryParams, TrackerError> {
    let mut params = base.clone();

    if let Some(rt) = given_str(request.rt.as_deref()) {
        single_route(rt)?;
        params.insert_opt("rtdir", request.rtdir.as_deref());
        params.insert("rt", rt);
    }
    params.insert_opt("rtpidatafeed", request.rtpidatafeed.as_deref());

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> QueryParams {
        QueryParams::new()
            .with("key", "k")
            .with("format", "json")
            .with("locale", "en")
    }

    fn ids(n: usize) -> Vec<String> {
        (1..=n).map(|i| i.to_string()).collect()
    }

    fn message(err: TrackerError) -> String {
        match err {
            TrackerError::InvalidArgument(msg) => msg,
            other => panic!("expected argument error, got {other:?}"),
        }
    }

    // ------------------------------------------------------------------
    // getvehicles
    // ------------------------------------------------------------------

    #[test]
    fn vehicles_requires_exactly_one_selector() {
        let neither = VehiclesRequest::default();
        let both = VehiclesRequest {
            vid: Some("1".into()),
            rt: Some("20".into()),
            ..Default::default()
        };
        assert!(vehicles_params(&base(), &neither).is_err());
        assert!(vehicles_params(&base(), &both).is_err());
    }

    #[test]
    fn vehicles_accepts_ten_and_rejects_eleven() {
        let ten = VehiclesRequest::by_vehicle(ids(10));
        let params = vehicles_params(&base(), &ten).unwrap();
        assert_eq!(params.get("vid"), Some("1,2,3,4,5,6,7,8,9,10"));

        let eleven = VehiclesRequest::by_route(ids(11).join(","));
        let msg = message(vehicles_params(&base(), &eleven).unwrap_err());
        assert!(msg.contains("rt"), "{msg}");
    }

    #[test]
    fn vehicles_route_list_is_joined_into_params() {
        let request = VehiclesRequest::by_route(["20", "X20"]);
        let params = vehicles_params(&base(), &request).unwrap();
        assert_eq!(params.get("rt"), Some("20,X20"));
        assert_eq!(params.get("tmres"), Some("s"));
        assert!(!params.contains("vid"));
    }

    #[test]
    fn vehicles_route_cap_uses_route_count() {
        let request = VehiclesRequest {
            vid: None,
            rt: Some(ids(11).into()),
            tmres: TimeResolution::Minutes,
        };
        assert!(vehicles_params(&base(), &request).is_err());
    }

    #[test]
    fn vehicles_keeps_base_params() {
        let base = base();
        let params = vehicles_params(&base, &VehiclesRequest::by_vehicle("101")).unwrap();
        assert_eq!(params.get("key"), Some("k"));
        assert_eq!(params.get("format"), Some("json"));
        assert!(!base.contains("vid"));
    }

    #[test]
    fn empty_selector_counts_as_absent() {
        let request = VehiclesRequest {
            vid: Some("".into()),
            rt: Some("20".into()),
            ..Default::default()
        };
        let params = vehicles_params(&base(), &request).unwrap();
        assert_eq!(params.get("rt"), Some("20"));
    }

    // ------------------------------------------------------------------
    // getdirections
    // ------------------------------------------------------------------

    #[test]
    fn directions_requires_one_route() {
        assert_eq!(
            directions_params(&base(), "20").unwrap().get("rt"),
            Some("20")
        );
        assert!(directions_params(&base(), "20,X20").is_err());
        assert!(directions_params(&base(), "").is_err());
    }

    // ------------------------------------------------------------------
    // getstops
    // ------------------------------------------------------------------

    #[test]
    fn stops_rt_without_dir_fails() {
        let request = StopsRequest {
            rt: Some("20".to_string()),
            ..Default::default()
        };
        let msg = message(stops_params(&base(), &request).unwrap_err());
        assert_eq!(msg, "dir required when rt provided");
    }

    #[test]
    fn stops_dir_without_rt_fails() {
        let request = StopsRequest {
            dir: Some("Eastbound".to_string()),
            ..Default::default()
        };
        assert!(stops_params(&base(), &request).is_err());
    }

    #[test]
    fn stops_route_and_direction() {
        let params = stops_params(&base(), &StopsRequest::for_route("20", "Eastbound")).unwrap();
        assert_eq!(params.get("rt"), Some("20"));
        assert_eq!(params.get("dir"), Some("Eastbound"));
    }

    #[test]
    fn stops_rejects_multiple_routes() {
        let request = StopsRequest::for_route("20,X20", "Eastbound");
        assert!(stops_params(&base(), &request).is_err());
    }

    #[test]
    fn stops_by_id_list() {
        let params = stops_params(&base(), &StopsRequest::by_stop(["456", "1836"])).unwrap();
        assert_eq!(params.get("stpid"), Some("456,1836"));
        assert!(stops_params(&base(), &StopsRequest::by_stop(ids(11))).is_err());
    }

    #[test]
    fn stops_rejects_mixed_and_empty() {
        let mixed = StopsRequest {
            rt: Some("20".to_string()),
            dir: Some("Eastbound".to_string()),
            stpid: Some("456".into()),
        };
        assert!(stops_params(&base(), &mixed).is_err());
        assert!(stops_params(&base(), &StopsRequest::default()).is_err());
    }

    // ------------------------------------------------------------------
    // getpatterns
    // ------------------------------------------------------------------

    #[test]
    fn patterns_exactly_one_selector() {
        assert!(patterns_params(&base(), &PatternsRequest::default()).is_err());
        let both = PatternsRequest {
            pid: Some("954".into()),
            rt: Some("20".into()),
        };
        assert!(patterns_params(&base(), &both).is_err());

        let params = patterns_params(&base(), &PatternsRequest::by_pattern(vec!["954", "955"])).unwrap();
        assert_eq!(params.get("pid"), Some("954,955"));
        assert!(patterns_params(&base(), &PatternsRequest::by_route(ids(11))).is_err());
    }

    // ------------------------------------------------------------------
    // getpredictions
    // ------------------------------------------------------------------

    #[test]
    fn predictions_by_vehicle_list() {
        let request = PredictionsRequest::by_vehicle("101,102");
        let params = predictions_params(&base(), &request).unwrap();
        assert_eq!(params.get("vid"), Some("101,102"));
        assert_eq!(params.get("tmres"), Some("s"));
        assert!(!params.contains("top"));
    }

    #[test]
    fn predictions_route_with_vehicle_fails() {
        let request = PredictionsRequest::by_vehicle("101").with_route("20");
        let msg = message(predictions_params(&base(), &request).unwrap_err());
        assert_eq!(msg, "rt not allowed with vid");
    }

    #[test]
    fn predictions_route_with_stop_is_joined() {
        let request = PredictionsRequest::by_stop("456").with_route(["20", "X20"]);
        let params = predictions_params(&base(), &request).unwrap();
        assert_eq!(params.get("stpid"), Some("456"));
        assert_eq!(params.get("rt"), Some("20,X20"));
    }

    #[test]
    fn predictions_top_only_when_positive() {
        let with_top = PredictionsRequest::by_stop("456").with_top(3);
        assert_eq!(predictions_params(&base(), &with_top).unwrap().get("top"), Some("3"));

        let zero = PredictionsRequest::by_stop("456").with_top(0);
        assert!(!predictions_params(&base(), &zero).unwrap().contains("top"));
    }

    #[test]
    fn predictions_selector_rules() {
        assert!(predictions_params(&base(), &PredictionsRequest::default()).is_err());
        let both = PredictionsRequest {
            stpid: Some("456".into()),
            vid: Some("101".into()),
            ..Default::default()
        };
        assert!(predictions_params(&base(), &both).is_err());
        assert!(predictions_params(&base(), &PredictionsRequest::by_stop(ids(11))).is_err());
    }

    #[test]
    fn predictions_minute_resolution() {
        let request = PredictionsRequest::by_stop("456").with_tmres(TimeResolution::Minutes);
        assert_eq!(predictions_params(&base(), &request).unwrap().get("tmres"), Some("m"));
    }

    // ------------------------------------------------------------------
    // getservicebulletins
    // ------------------------------------------------------------------

    #[test]
    fn bulletins_exactly_one_selector() {
        assert!(service_bulletins_params(&base(), &ServiceBulletinsRequest::default()).is_err());
        let both = ServiceBulletinsRequest {
            rt: Some("20".into()),
            stpid: Some("456".into()),
            rtdir: None,
        };
        assert!(service_bulletins_params(&base(), &both).is_err());
    }

    #[test]
    fn bulletins_direction_needs_single_route() {
        let single = ServiceBulletinsRequest::by_route("20").with_direction("Eastbound");
        let params = service_bulletins_params(&base(), &single).unwrap();
        assert_eq!(params.get("rtdir"), Some("Eastbound"));
        assert_eq!(params.get("rt"), Some("20"));

        let many = ServiceBulletinsRequest::by_route(["20", "X20"]).with_direction("Eastbound");
        assert!(service_bulletins_params(&base(), &many).is_err());
    }

    #[test]
    fn bulletins_direction_ignored_for_stops() {
        let request = ServiceBulletinsRequest::by_stop("456").with_direction("Eastbound");
        let params = service_bulletins_params(&base(), &request).unwrap();
        assert_eq!(params.get("stpid"), Some("456"));
        assert!(!params.contains("rtdir"));
    }

    #[test]
    fn bulletins_caps() {
        assert!(service_bulletins_params(&base(), &ServiceBulletinsRequest::by_route(ids(11))).is_err());
        assert!(service_bulletins_params(&base(), &ServiceBulletinsRequest::by_stop(ids(11))).is_err());
        assert!(service_bulletins_params(&base(), &ServiceBulletinsRequest::by_stop(ids(10))).is_ok());
    }

    // ------------------------------------------------------------------
    // getdetours, gettime, getlocalelist
    // ------------------------------------------------------------------

    #[test]
    fn detours_all_optional() {
        assert_eq!(detours_params(&base(), &DetoursRequest::all()).unwrap(), base());
    }

    #[test]
    fn detours_route_rules() {
        let request = DetoursRequest::for_route("20")
            .with_direction("Eastbound")
            .with_data_feed("bustime");
        let params = detours_params(&base(), &request).unwrap();
        assert_eq!(params.get("rt"), Some("20"));
        assert_eq!(params.get("rtdir"), Some("Eastbound"));
        assert_eq!(params.get("rtpidatafeed"), Some("bustime"));

        assert!(detours_params(&base(), &DetoursRequest::for_route("20,X20")).is_err());
    }

    #[test]
    fn detours_direction_without_route_is_dropped() {
        let request = DetoursRequest::all().with_direction("Eastbound");
        assert!(!detours_params(&base(), &request).unwrap().contains("rtdir"));
    }

    #[test]
    fn flags_only_when_true() {
        assert!(!time_params(&base(), false).contains("unixTime"));
        assert_eq!(time_params(&base(), true).get("unixTime"), Some("true"));
        assert!(!locale_list_params(&base(), false).contains("inLocaleLanguage"));
        assert_eq!(
            locale_list_params(&base(), true).get("inLocaleLanguage"),
            Some("true")
        );
    }

    // ------------------------------------------------------------------
    // BusCall dispatch
    // ------------------------------------------------------------------

    #[test]
    fn call_dispatches_to_endpoint_and_validator() {
        let request = VehiclesRequest::by_route("20");
        let call = BusCall::Vehicles(&request);
        assert_eq!(call.endpoint(), BusEndpoint::Vehicles);
        assert_eq!(call.params(&base()).unwrap().get("rt"), Some("20"));

        assert_eq!(BusCall::Routes.params(&base()).unwrap(), base());
        assert_eq!(BusCall::Agencies.endpoint(), BusEndpoint::Agencies);
        assert!(BusCall::Directions { rt: "1,2" }.params(&base()).is_err());
    }

    #[test]
    fn params_survive_url_encoding() {
        let request = PredictionsRequest::by_stop(["456", "1836"]).with_top(5);
        let params = predictions_params(&base(), &request).unwrap();
        assert_eq!(QueryParams::from_encoded(&params.encode()), params);
    }
}
