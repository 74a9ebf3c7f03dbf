//! Typed decorators over the raw Train Tracker clients

use domain::{IdList, TrackerError};

use crate::client::{AsyncTrainTracker, TrainTracker};
use crate::models::{ArrivalsResponse, FollowResponse, PositionsResponse, TrainResponse};
use crate::params::ArrivalsRequest;
use crate::parser::parse_train_response;

/// Result of a typed Train Tracker call
pub type TypedResult<T> = Result<TrainResponse<T>, TrackerError>;

/// Typed wrapper around a blocking [`TrainTracker`]
#[derive(Debug, Clone)]
pub struct TypedTrainTracker<C> {
    inner: C,
}

impl<C: TrainTracker> TypedTrainTracker<C> {
    /// Wrap a raw client
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped client
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap the raw client
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// `ttarrivals`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` before any request, transport failures, or
    /// `SchemaValidation`; a non-zero `errCd` comes back as `Ok(Failure)`.
    pub fn arrivals(&self, request: &ArrivalsRequest) -> TypedResult<ArrivalsResponse> {
        parse_train_response(self.inner.arrivals(request)?)
    }

    /// `ttfollow`
    ///
    /// # Errors
    ///
    /// See [`TypedTrainTracker::arrivals`].
    pub fn follow(&self, runnumber: &str) -> TypedResult<FollowResponse> {
        parse_train_response(self.inner.follow(runnumber)?)
    }

    /// `ttpositions`
    ///
    /// # Errors
    ///
    /// See [`TypedTrainTracker::arrivals`].
    pub fn positions(&self, rt: &IdList) -> TypedResult<PositionsResponse> {
        parse_train_response(self.inner.positions(rt)?)
    }
}

/// Typed wrapper around an [`AsyncTrainTracker`], usually a session
#[derive(Debug, Clone)]
pub struct AsyncTypedTrainTracker<C> {
    inner: C,
}

impl<C: AsyncTrainTracker> AsyncTypedTrainTracker<C> {
    /// Wrap a raw client
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped client
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap the raw client, e.g. to close a session
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// `ttarrivals`
    pub async fn arrivals(&self, request: &ArrivalsRequest) -> TypedResult<ArrivalsResponse> {
        parse_train_response(self.inner.arrivals(request).await?)
    }

    /// `ttfollow`
    pub async fn follow(&self, runnumber: &str) -> TypedResult<FollowResponse> {
        parse_train_response(self.inner.follow(runnumber).await?)
    }

    /// `ttpositions`
    pub async fn positions(&self, rt: &IdList) -> TypedResult<PositionsResponse> {
        parse_train_response(self.inner.positions(rt).await?)
    }
}
