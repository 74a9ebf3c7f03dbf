//! CTA Bus Tracker integration for WindyTracker
//!
//! Client for the Bus Tracker API v3 (<https://www.ctabustracker.com/bustime/api/v3/>).
//!
//! # Architecture
//!
//! [`BusTracker`] (blocking) and [`AsyncBusTracker`] define the twelve
//! endpoints and return raw JSON. [`HttpBusTracker`] implements the
//! blocking trait; [`AsyncHttpBusTracker`] opens a [`BusSession`] that
//! implements the async one. Both validate arguments through the same
//! [`params`] functions before any request is sent. [`TypedBusTracker`] and
//! [`AsyncTypedBusTracker`] decorate either client and return
//! [`BusResponse`] values, where an API error payload is a
//! [`ApiResponse::Failure`](domain::ApiResponse::Failure) rather than an `Err`.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_bus::{AsyncHttpBusTracker, AsyncTypedBusTracker, BusTrackerConfig, StopsRequest};
//!
//! let tracker = AsyncHttpBusTracker::new(&BusTrackerConfig::new("secret"))?;
//! let typed = AsyncTypedBusTracker::new(tracker.open_session()?);
//!
//! let (routes, stops) = futures::join!(
//!     typed.get_routes(),
//!     typed.get_stops(&StopsRequest::for_route("20", "Eastbound")),
//! );
//!
//! typed.into_inner().close();
//! ```

mod client;
mod config;
mod endpoint;
mod models;
pub mod params;
mod parser;
mod typed;

pub use client::{AsyncBusTracker, AsyncHttpBusTracker, BusSession, BusTracker, HttpBusTracker};
pub use config::{BusTrackerConfig, CONFIG_SECTION};
pub use endpoint::BusEndpoint;
pub use models::*;
pub use params::{
    BusCall, DetoursRequest, PatternsRequest, PredictionsRequest, ServiceBulletinsRequest,
    StopsRequest, TimeResolution, VehiclesRequest,
};
pub use parser::{BUS_WRAPPER_KEY, parse_bus_response};
pub use typed::{AsyncTypedBusTracker, TypedBusTracker, TypedResult};
