//! API-level error payload

use std::fmt;

use domain::de;
use serde::{Deserialize, Serialize};

/// One error message, with the identifier it refers to when the API names one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Message text (e.g. "No data found for parameter")
    pub msg: String,
    /// Route the message refers to
    #[serde(default, deserialize_with = "de::optional_text", skip_serializing_if = "Option::is_none")]
    pub rt: Option<String>,
    /// Stop the message refers to
    #[serde(default, deserialize_with = "de::optional_text", skip_serializing_if = "Option::is_none")]
    pub stpid: Option<String>,
    /// Vehicle the message refers to
    #[serde(default, deserialize_with = "de::optional_text", skip_serializing_if = "Option::is_none")]
    pub vid: Option<String>,
    /// Pattern the message refers to
    #[serde(default, deserialize_with = "de::optional_text", skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)?;
        let context = [("rt", &self.rt), ("stpid", &self.stpid), ("vid", &self.vid), ("pid", &self.pid)];
        for (name, value) in context {
            if let Some(value) = value {
                write!(f, " ({name}={value})")?;
            }
        }
        Ok(())
    }
}

/// Error payload of the Bus Tracker API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusApiError {
    /// Messages, one per rejected identifier or condition
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub error: Vec<ErrorMessage>,
}

impl BusApiError {
    /// Message texts in order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.error.iter().map(|e| e.msg.as_str())
    }
}

impl fmt::Display for BusApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.error.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}
