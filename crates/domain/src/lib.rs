//! Domain layer for WindyTracker
//!
//! Value objects, query parameters, response envelope and error taxonomy
//! shared by the bus and train tracker clients. Nothing here performs I/O.

pub mod de;
pub mod errors;
pub mod query;
pub mod response;
pub mod value_objects;

pub use errors::{DomainError, TrackerError};
pub use query::QueryParams;
pub use response::ApiResponse;
pub use value_objects::*;
