//! Bus Tracker clients
//!
//! [`BusTracker`] and [`AsyncBusTracker`] expose the same twelve endpoints
//! and return the raw decoded JSON body. [`HttpBusTracker`] blocks the
//! calling thread; [`AsyncHttpBusTracker`] hands out a [`BusSession`] whose
//! calls can be awaited concurrently. Argument validation is shared through
//! [`BusCall`] and runs before any request is issued.

use async_trait::async_trait;
use domain::{QueryParams, TrackerError};
use infrastructure::http::{BlockingHttpClient, HttpClientConfig, HttpSession, build_url};
#[cfg(test)]
use mockall::automock;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::BusTrackerConfig;
use crate::params::{
    BusCall, DetoursRequest, PatternsRequest, PredictionsRequest, ServiceBulletinsRequest,
    StopsRequest, VehiclesRequest,
};

/// Blocking Bus Tracker capability
#[cfg_attr(test, automock)]
pub trait BusTracker: Send + Sync {
    /// `gettime`: current system time, as epoch milliseconds if `unix_time`
    ///
    /// # Errors
    ///
    /// Transport failures only; this call takes no validated arguments.
    fn get_time(&self, unix_time: bool) -> Result<Value, TrackerError>;

    /// `getrtpidatafeeds`: configured real-time data feeds
    ///
    /// # Errors
    ///
    /// Transport failures.
    fn get_rtpi_data_feeds(&self) -> Result<Value, TrackerError>;

    /// `getvehicles`: vehicles by id or by route
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if not exactly one of `vid`/`rt` is given or more
    /// than 10 identifiers are passed, otherwise transport failures.
    fn get_vehicles(&self, request: &VehiclesRequest) -> Result<Value, TrackerError>;

    /// `getroutes`: all routes
    ///
    /// # Errors
    ///
    /// Transport failures.
    fn get_routes(&self) -> Result<Value, TrackerError>;

    /// `getdirections`: directions served by one route
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `rt` is empty or lists several routes.
    fn get_directions(&self, rt: &str) -> Result<Value, TrackerError>;

    /// `getstops`: stops by route and direction, or by id
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on an invalid argument combination.
    fn get_stops(&self, request: &StopsRequest) -> Result<Value, TrackerError>;

    /// `getpatterns`: patterns by id or by route
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on an invalid argument combination.
    fn get_patterns(&self, request: &PatternsRequest) -> Result<Value, TrackerError>;

    /// `getpredictions`: predictions by stop or by vehicle
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on an invalid argument combination.
    fn get_predictions(&self, request: &PredictionsRequest) -> Result<Value, TrackerError>;

    /// `getservicebulletins`: bulletins by route or by stop
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on an invalid argument combination.
    fn get_service_bulletins(&self, request: &ServiceBulletinsRequest) -> Result<Value, TrackerError>;

    /// `getlocalelist`: supported locales
    ///
    /// # Errors
    ///
    /// Transport failures.
    fn get_locale_list(&self, in_locale_language: bool) -> Result<Value, TrackerError>;

    /// `getdetours`: active detours, optionally for one route
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if several routes are given.
    fn get_detours(&self, request: &DetoursRequest) -> Result<Value, TrackerError>;

    /// `getagencies`: agencies imported in the system
    ///
    /// # Errors
    ///
    /// Transport failures.
    fn get_agencies(&self) -> Result<Value, TrackerError>;
}

/// Async Bus Tracker capability; mirrors [`BusTracker`]
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AsyncBusTracker: Send + Sync {
    /// `gettime`
    async fn get_time(&self, unix_time: bool) -> Result<Value, TrackerError>;

    /// `getrtpidatafeeds`
    async fn get_rtpi_data_feeds(&self) -> Result<Value, TrackerError>;

    /// `getvehicles`
    async fn get_vehicles(&self, request: &VehiclesRequest) -> Result<Value, TrackerError>;

    /// `getroutes`
    async fn get_routes(&self) -> Result<Value, TrackerError>;

    /// `getdirections`
    async fn get_directions(&self, rt: &str) -> Result<Value, TrackerError>;

    /// `getstops`
    async fn get_stops(&self, request: &StopsRequest) -> Result<Value, TrackerError>;

    /// `getpatterns`
    async fn get_patterns(&self, request: &PatternsRequest) -> Result<Value, TrackerError>;

    /// `getpredictions`
    async fn get_predictions(&self, request: &PredictionsRequest) -> Result<Value, TrackerError>;

    /// `getservicebulletins`
    async fn get_service_bulletins(
        &self,
        request: &ServiceBulletinsRequest,
    ) -> Result<Value, TrackerError>;

    /// `getlocalelist`
    async fn get_locale_list(&self, in_locale_language: bool) -> Result<Value, TrackerError>;

    /// `getdetours`
    async fn get_detours(&self, request: &DetoursRequest) -> Result<Value, TrackerError>;

    /// `getagencies`
    async fn get_agencies(&self) -> Result<Value, TrackerError>;
}

/// Fixed per-tracker request settings: base URL and base parameters
#[derive(Debug, Clone)]
struct RequestTarget {
    base_url: Url,
    base_params: QueryParams,
}

impl RequestTarget {
    fn from_config(config: &BusTrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;
        Ok(Self {
            base_url: config.base_url()?,
            base_params: config.base_params(),
        })
    }

    /// Validate the call and assemble its URL
    fn url(&self, call: BusCall<'_>) -> Result<Url, TrackerError> {
        let params = call.params(&self.base_params)?;
        build_url(&self.base_url, call.endpoint().as_str(), &params)
    }
}

/// Blocking HTTP implementation of [`BusTracker`]
///
/// Must not be created or used from within an async runtime; use
/// [`AsyncHttpBusTracker`] there.
#[derive(Debug, Clone)]
pub struct HttpBusTracker {
    target: RequestTarget,
    http: BlockingHttpClient,
}

impl HttpBusTracker {
    /// Create a tracker
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid, or
    /// `ConnectionFailed` if the HTTP client cannot be built.
    pub fn new(config: &BusTrackerConfig) -> Result<Self, TrackerError> {
        Self::with_http_config(config, &HttpClientConfig::default())
    }

    /// Create a tracker with custom HTTP settings
    ///
    /// # Errors
    ///
    /// See [`HttpBusTracker::new`].
    pub fn with_http_config(
        config: &BusTrackerConfig,
        http: &HttpClientConfig,
    ) -> Result<Self, TrackerError> {
        Ok(Self {
            target: RequestTarget::from_config(config)?,
            http: BlockingHttpClient::with_config(http)?,
        })
    }

    #[instrument(skip_all, fields(endpoint = %call.endpoint()))]
    fn send(&self, call: BusCall<'_>) -> Result<Value, TrackerError> {
        let url = self.target.url(call)?;
        debug!("Dispatching Bus Tracker request");
        self.http.get_json(&url)
    }
}

impl BusTracker for HttpBusTracker {
    fn get_time(&self, unix_time: bool) -> Result<Value, TrackerError> {
        self.send(BusCall::Time { unix_time })
    }

    fn get_rtpi_data_feeds(&self) -> Result<Value, TrackerError> {
        self.send(BusCall::RtpiDataFeeds)
    }

    fn get_vehicles(&self, request: &VehiclesRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::Vehicles(request))
    }

    fn get_routes(&self) -> Result<Value, TrackerError> {
        self.send(BusCall::Routes)
    }

    fn get_directions(&self, rt: &str) -> Result<Value, TrackerError> {
        self.send(BusCall::Directions { rt })
    }

    fn get_stops(&self, request: &StopsRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::Stops(request))
    }

    fn get_patterns(&self, request: &PatternsRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::Patterns(request))
    }

    fn get_predictions(&self, request: &PredictionsRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::Predictions(request))
    }

    fn get_service_bulletins(&self, request: &ServiceBulletinsRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::ServiceBulletins(request))
    }

    fn get_locale_list(&self, in_locale_language: bool) -> Result<Value, TrackerError> {
        self.send(BusCall::LocaleList { in_locale_language })
    }

    fn get_detours(&self, request: &DetoursRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::Detours(request))
    }

    fn get_agencies(&self) -> Result<Value, TrackerError> {
        self.send(BusCall::Agencies)
    }
}

/// Async HTTP Bus Tracker
///
/// Holds only configuration. Requests are made through a [`BusSession`]
/// obtained from [`AsyncHttpBusTracker::open_session`].
#[derive(Debug, Clone)]
pub struct AsyncHttpBusTracker {
    target: RequestTarget,
    http: HttpClientConfig,
}

impl AsyncHttpBusTracker {
    /// Create a tracker
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid.
    pub fn new(config: &BusTrackerConfig) -> Result<Self, TrackerError> {
        Self::with_http_config(config, HttpClientConfig::default())
    }

    /// Create a tracker with custom HTTP settings
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid.
    pub fn with_http_config(
        config: &BusTrackerConfig,
        http: HttpClientConfig,
    ) -> Result<Self, TrackerError> {
        Ok(Self {
            target: RequestTarget::from_config(config)?,
            http,
        })
    }

    /// Open a session for issuing requests
    ///
    /// The session is released when it is closed or dropped.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the HTTP client cannot be built.
    pub fn open_session(&self) -> Result<BusSession<'_>, TrackerError> {
        Ok(BusSession {
            tracker: self,
            session: HttpSession::open(&self.http)?,
        })
    }
}

/// An open async session against the Bus Tracker API
#[derive(Debug)]
pub struct BusSession<'a> {
    tracker: &'a AsyncHttpBusTracker,
    session: HttpSession,
}

impl BusSession<'_> {
    /// Close the session
    pub fn close(self) {
        self.session.close();
    }

    #[instrument(skip_all, fields(endpoint = %call.endpoint()))]
    async fn send(&self, call: BusCall<'_>) -> Result<Value, TrackerError> {
        let url = self.tracker.target.url(call)?;
        debug!("Dispatching Bus Tracker request");
        self.session.get_json(&url).await
    }
}

#[async_trait]
impl AsyncBusTracker for BusSession<'_> {
    async fn get_time(&self, unix_time: bool) -> Result<Value, TrackerError> {
        self.send(BusCall::Time { unix_time }).await
    }

    async fn get_rtpi_data_feeds(&self) -> Result<Value, TrackerError> {
        self.send(BusCall::RtpiDataFeeds).await
    }

    async fn get_vehicles(&self, request: &VehiclesRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::Vehicles(request)).await
    }

    async fn get_routes(&self) -> Result<Value, TrackerError> {
        self.send(BusCall::Routes).await
    }

    async fn get_directions(&self, rt: &str) -> Result<Value, TrackerError> {
        self.send(BusCall::Directions { rt }).await
    }

    async fn get_stops(&self, request: &StopsRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::Stops(request)).await
    }

    async fn get_patterns(&self, request: &PatternsRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::Patterns(request)).await
    }

    async fn get_predictions(&self, request: &PredictionsRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::Predictions(request)).await
    }

    async fn get_service_bulletins(
        &self,
        request: &ServiceBulletinsRequest,
    ) -> Result<Value, TrackerError> {
        self.send(BusCall::ServiceBulletins(request)).await
    }

    async fn get_locale_list(&self, in_locale_language: bool) -> Result<Value, TrackerError> {
        self.send(BusCall::LocaleList { in_locale_language }).await
    }

    async fn get_detours(&self, request: &DetoursRequest) -> Result<Value, TrackerError> {
        self.send(BusCall::Detours(request)).await
    }

    async fn get_agencies(&self) -> Result<Value, TrackerError> {
        self.send(BusCall::Agencies).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> RequestTarget {
        RequestTarget::from_config(&BusTrackerConfig::new("secret")).unwrap()
    }

    #[test]
    fn url_carries_base_and_call_params() {
        let request = VehiclesRequest::by_route("20");
        let url = target().url(BusCall::Vehicles(&request)).unwrap();
        assert_eq!(url.path(), "/bustime/api/v3/getvehicles");
        assert_eq!(
            url.query(),
            Some("key=secret&format=json&locale=en&tmres=s&rt=20")
        );
    }

    #[test]
    fn url_rejects_invalid_arguments() {
        let err = target().url(BusCall::Directions { rt: "" }).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidArgument(_)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = AsyncHttpBusTracker::new(&BusTrackerConfig::new("")).unwrap_err();
        assert!(matches!(err, TrackerError::Configuration(_)));
    }

    #[test]
    fn session_borrows_tracker() {
        let tracker = AsyncHttpBusTracker::new(&BusTrackerConfig::new("secret")).unwrap();
        let session = tracker.open_session().unwrap();
        session.close();
    }
}
