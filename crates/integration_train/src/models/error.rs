//! API-level error payload

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message used when an error payload carries no text
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Error payload of the Train Tracker API: a non-zero `errCd` and its text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainApiError {
    /// Error code as sent (e.g. "101")
    pub code: String,
    /// Error text
    pub message: String,
}

impl TrainApiError {
    /// Create an error payload; a missing message reads as "Unknown error"
    pub fn new(code: impl Into<String>, message: Option<String>) -> Self {
        Self {
            code: code.into(),
            message: message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        }
    }

    /// Numeric error code, if the code is numeric
    #[must_use]
    pub fn numeric_code(&self) -> Option<u32> {
        self.code.parse().ok()
    }
}

impl fmt::Display for TrainApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error {}: {}", self.code, self.message)
    }
}
