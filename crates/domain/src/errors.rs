//! Error taxonomy shared by both tracker verticals

use thiserror::Error;

/// Errors raised while constructing value objects from API data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Colour string is not six hex digits (with or without `#`)
    #[error("Invalid hex color format: {0}")]
    InvalidHexColor(String),

    /// Latitude outside [-90, 90] or not a number
    #[error("Latitude must be between -90 and 90 degrees, got: {0}")]
    InvalidLatitude(String),

    /// Longitude outside [-180, 180] or not a number
    #[error("Longitude must be between -180 and 180 degrees, got: {0}")]
    InvalidLongitude(String),

    /// Heading outside [0, 360] or not an integer
    #[error("Heading must be between 0-360 degrees, got: {0}")]
    InvalidHeading(String),

    /// Timestamp matched none of the accepted formats
    #[error("Invalid timestamp {value:?}, expected {expected}")]
    InvalidTimestamp {
        /// The rejected text
        value: String,
        /// Human-readable list of accepted formats
        expected: &'static str,
    },

    /// Service date not in `yyyy-mm-dd` form
    #[error("Service date must be in yyyy-mm-dd format, got: {0}")]
    InvalidDate(String),

    /// Value not part of a documented code set
    #[error("{field} must be one of {allowed}, got: {value}")]
    UnknownCode {
        /// Field name as documented by the API
        field: &'static str,
        /// Allowed values, for the message
        allowed: &'static str,
        /// The rejected value
        value: String,
    },

    /// Numeric value outside its documented range
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// Field name as documented by the API
        field: &'static str,
        /// The rejected value
        value: String,
    },
}

impl DomainError {
    /// Create an unknown-code error
    pub fn unknown_code(field: &'static str, allowed: &'static str, value: impl ToString) -> Self {
        Self::UnknownCode {
            field,
            allowed,
            value: value.to_string(),
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(field: &'static str, value: impl ToString) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
        }
    }
}

/// Errors returned by tracker operations
///
/// API-level error payloads are not represented here; they come back as
/// [`crate::ApiResponse::Failure`].
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Arguments violate an endpoint's combination or cardinality rule
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Connection to the tracker service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Service answered with a non-success status
    #[error("Request failed with HTTP {status}: {body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body (truncated)
        body: String,
    },

    /// Response body was not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Decoded response does not match the expected schema
    #[error("Failed to parse API response: {0}")]
    SchemaValidation(String),

    /// Client configuration is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TrackerError {
    /// Create an argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns true if this error came from the transport layer
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed { .. } | Self::ParseError(_)
        )
    }
}

impl From<DomainError> for TrackerError {
    fn from(err: DomainError) -> Self {
        Self::SchemaValidation(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::SchemaValidation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_are_classified() {
        assert!(TrackerError::ConnectionFailed("refused".to_string()).is_transport());
        assert!(
            TrackerError::RequestFailed {
                status: 503,
                body: String::new()
            }
            .is_transport()
        );
        assert!(TrackerError::ParseError("eof".to_string()).is_transport());
    }

    #[test]
    fn non_transport_errors_are_classified() {
        assert!(!TrackerError::invalid_argument("rt").is_transport());
        assert!(!TrackerError::SchemaValidation("lat".to_string()).is_transport());
        assert!(!TrackerError::Configuration("key".to_string()).is_transport());
    }

    #[test]
    fn argument_error_message_names_rule() {
        let err = TrackerError::invalid_argument("dir required when rt provided");
        assert_eq!(
            err.to_string(),
            "Invalid argument: dir required when rt provided"
        );
    }

    #[test]
    fn unknown_code_message() {
        let err = DomainError::unknown_code("typ", "A, D", "X");
        assert_eq!(err.to_string(), "typ must be one of A, D, got: X");
    }

    #[test]
    fn domain_errors_become_schema_failures() {
        let err: TrackerError = DomainError::InvalidLatitude("91".to_string()).into();
        match err {
            TrackerError::SchemaValidation(message) => assert!(message.contains("91")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serde_errors_become_schema_failures() {
        let err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err: TrackerError = err.into();
        assert!(matches!(err, TrackerError::SchemaValidation(_)));
    }
}
