//! CTA Train Tracker integration for WindyTracker
//!
//! Client for the Train Tracker API (<https://lapi.transitchicago.com/api/1.0/>).
//!
//! # Architecture
//!
//! The crate mirrors `integration_bus`: [`TrainTracker`] (blocking) and
//! [`AsyncTrainTracker`] return raw JSON for `ttarrivals`, `ttfollow` and
//! `ttpositions`; [`HttpTrainTracker`] and [`TrainSession`] implement them;
//! [`TypedTrainTracker`] and [`AsyncTypedTrainTracker`] parse the `ctatt`
//! envelope into [`TrainResponse`] values. A non-zero `errCd` is an
//! [`ApiResponse::Failure`](domain::ApiResponse::Failure), not an `Err`.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_train::{ArrivalsRequest, HttpTrainTracker, TrainTrackerConfig, TypedTrainTracker};
//!
//! let tracker = TypedTrainTracker::new(HttpTrainTracker::new(&TrainTrackerConfig::new("secret"))?);
//! let arrivals = tracker.arrivals(&ArrivalsRequest::by_station("40380").with_max(5))?;
//! ```

mod client;
mod config;
mod endpoint;
mod ids;
mod models;
pub mod params;
mod parser;
mod typed;

pub use client::{
    AsyncHttpTrainTracker, AsyncTrainTracker, HttpTrainTracker, TrainSession, TrainTracker,
};
pub use config::{CONFIG_SECTION, TrainTrackerConfig};
pub use endpoint::TrainEndpoint;
pub use ids::{StationId, StopId};
pub use models::{
    Arrival, ArrivalsResponse, FollowResponse, Position, PositionsResponse, RoutePositions, Train,
    TrainApiError, TrainDirection, TrainLine, TrainResponse, UNKNOWN_ERROR,
};
pub use params::{ArrivalsRequest, TrainCall};
pub use parser::{TRAIN_WRAPPER_KEY, parse_train_response};
pub use typed::{AsyncTypedTrainTracker, TypedResult, TypedTrainTracker};
