//! Train Tracker clients
//!
//! [`TrainTracker`] and [`AsyncTrainTracker`] expose the three endpoints
//! and return the raw decoded JSON body. [`HttpTrainTracker`] blocks;
//! [`AsyncHttpTrainTracker`] hands out a [`TrainSession`] for async use.
//! Both validate arguments through [`TrainCall`] before any request.

use async_trait::async_trait;
use domain::{IdList, QueryParams, TrackerError};
use infrastructure::http::{BlockingHttpClient, HttpClientConfig, HttpSession, build_url};
#[cfg(test)]
use mockall::automock;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::TrainTrackerConfig;
use crate::params::{ArrivalsRequest, TrainCall};

/// Blocking Train Tracker capability
#[cfg_attr(test, automock)]
pub trait TrainTracker: Send + Sync {
    /// `ttarrivals`: predictions for a station or platform
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if not exactly one valid `mapid`/`stpid` is given
    /// or `max` is zero, otherwise transport failures.
    fn arrivals(&self, request: &ArrivalsRequest) -> Result<Value, TrackerError>;

    /// `ttfollow`: upcoming stops of one run
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `runnumber` is empty.
    fn follow(&self, runnumber: &str) -> Result<Value, TrackerError>;

    /// `ttpositions`: trains on one or more lines
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if no line is given.
    fn positions(&self, rt: &IdList) -> Result<Value, TrackerError>;
}

/// Async Train Tracker capability; mirrors [`TrainTracker`]
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AsyncTrainTracker: Send + Sync {
    /// `ttarrivals`
    async fn arrivals(&self, request: &ArrivalsRequest) -> Result<Value, TrackerError>;

    /// `ttfollow`
    async fn follow(&self, runnumber: &str) -> Result<Value, TrackerError>;

    /// `ttpositions`
    async fn positions(&self, rt: &IdList) -> Result<Value, TrackerError>;
}

#[derive(Debug, Clone)]
struct RequestTarget {
    base_url: Url,
    base_params: QueryParams,
}

impl RequestTarget {
    fn from_config(config: &TrainTrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;
        Ok(Self {
            base_url: config.base_url()?,
            base_params: config.base_params(),
        })
    }

    fn url(&self, call: TrainCall<'_>) -> Result<Url, TrackerError> {
        let params = call.params(&self.base_params)?;
        build_url(&self.base_url, call.endpoint().as_str(), &params)
    }
}

/// Blocking HTTP implementation of [`TrainTracker`]
#[derive(Debug, Clone)]
pub struct HttpTrainTracker {
    target: RequestTarget,
    http: BlockingHttpClient,
}

impl HttpTrainTracker {
    /// Create a tracker
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid, or
    /// `ConnectionFailed` if the HTTP client cannot be built.
    pub fn new(config: &TrainTrackerConfig) -> Result<Self, TrackerError> {
        Self::with_http_config(config, &HttpClientConfig::default())
    }

    /// Create a tracker with custom HTTP settings
    ///
    /// # Errors
    ///
    /// See [`HttpTrainTracker::new`].
    pub fn with_http_config(
        config: &TrainTrackerConfig,
        http: &HttpClientConfig,
    ) -> Result<Self, TrackerError> {
        Ok(Self {
            target: RequestTarget::from_config(config)?,
            http: BlockingHttpClient::with_config(http)?,
        })
    }

    #[instrument(skip_all, fields(endpoint = %call.endpoint()))]
    fn send(&self, call: TrainCall<'_>) -> Result<Value, TrackerError> {
        let url = self.target.url(call)?;
        debug!("Dispatching Train Tracker request");
        self.http.get_json(&url)
    }
}

impl TrainTracker for HttpTrainTracker {
    fn arrivals(&self, request: &ArrivalsRequest) -> Result<Value, TrackerError> {
        self.send(TrainCall::Arrivals(request))
    }

    fn follow(&self, runnumber: &str) -> Result<Value, TrackerError> {
        self.send(TrainCall::Follow { runnumber })
    }

    fn positions(&self, rt: &IdList) -> Result<Value, TrackerError> {
        self.send(TrainCall::Positions { rt })
    }
}

/// Async HTTP Train Tracker; requests go through a [`TrainSession`]
#[derive(Debug, Clone)]
pub struct AsyncHttpTrainTracker {
    target: RequestTarget,
    http: HttpClientConfig,
}

impl AsyncHttpTrainTracker {
    /// Create a tracker
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid.
    pub fn new(config: &TrainTrackerConfig) -> Result<Self, TrackerError> {
        Self::with_http_config(config, HttpClientConfig::default())
    }

    /// Create a tracker with custom HTTP settings
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid.
    pub fn with_http_config(
        config: &TrainTrackerConfig,
        http: HttpClientConfig,
    ) -> Result<Self, TrackerError> {
        Ok(Self {
            target: RequestTarget::from_config(config)?,
            http,
        })
    }

    /// Open a session for issuing requests
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the HTTP client cannot be built.
    pub fn open_session(&self) -> Result<TrainSession<'_>, TrackerError> {
        Ok(TrainSession {
            tracker: self,
            session: HttpSession::open(&self.http)?,
        })
    }
}

/// An open async session against the Train Tracker API
#[derive(Debug)]
pub struct TrainSession<'a> {
    tracker: &'a AsyncHttpTrainTracker,
    session: HttpSession,
}

impl TrainSession<'_> {
    /// Close the session
    pub fn close(self) {
        self.session.close();
    }

    #[instrument(skip_all, fields(endpoint = %call.endpoint()))]
    async fn send(&self, call: TrainCall<'_>) -> Result<Value, TrackerError> {
        let url = self.tracker.target.url(call)?;
        debug!("Dispatching Train Tracker request");
        self.session.get_json(&url).await
    }
}

#[async_trait]
impl AsyncTrainTracker for TrainSession<'_> {
    async fn arrivals(&self, request: &ArrivalsRequest) -> Result<Value, TrackerError> {
        self.send(TrainCall::Arrivals(request)).await
    }

    async fn follow(&self, runnumber: &str) -> Result<Value, TrackerError> {
        self.send(TrainCall::Follow { runnumber }).await
    }

    async fn positions(&self, rt: &IdList) -> Result<Value, TrackerError> {
        self.send(TrainCall::Positions { rt }).await
    }
}
