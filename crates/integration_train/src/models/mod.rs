//! Typed Train Tracker payloads
//!
//! Each `*Response` type is the content of the `ctatt` wrapper for one
//! endpoint. The wrapper's `errCd`/`errNm` fields are handled by the parser
//! and are not part of the success payloads.

mod arrivals;
mod error;
mod lines;
mod positions;

use domain::ApiResponse;

pub use arrivals::{Arrival, ArrivalsResponse, FollowResponse, Position};
pub use error::{TrainApiError, UNKNOWN_ERROR};
pub use lines::{TrainDirection, TrainLine};
pub use positions::{PositionsResponse, RoutePositions, Train};

/// Success payload or API error payload of one Train Tracker call
pub type TrainResponse<T> = ApiResponse<T, TrainApiError>;
