//! Layered configuration loading
//!
//! Sources, lowest precedence first: serde defaults of the target type, an
//! optional TOML file, then environment variables such as
//! `WINDYTRACKER_BUS__API_KEY` (section and field separated by `__`).

use std::path::Path;

use domain::TrackerError;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WINDYTRACKER";

/// Load one configuration section
///
/// `file` is optional on disk; a missing file is not an error. A missing
/// section deserializes from an empty table, so types whose fields all have
/// serde defaults still load.
///
/// # Errors
///
/// Returns `Configuration` if a source cannot be read or the section does
/// not deserialize into `T`.
pub fn load_section<T: DeserializeOwned>(section: &str, file: Option<&Path>) -> Result<T, TrackerError> {
    let mut builder = config::Config::builder();
    if let Some(path) = file {
        builder = builder.add_source(config::File::from(path).required(false));
    }
    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .map_err(|e| TrackerError::Configuration(e.to_string()))?;

    debug!(section, "Loading configuration section");

    match settings.get::<T>(section) {
        Ok(value) => Ok(value),
        Err(config::ConfigError::NotFound(_)) => config::Config::builder()
            .build()
            .and_then(|empty| empty.try_deserialize::<T>())
            .map_err(|e| TrackerError::Configuration(format!("[{section}] {e}"))),
        Err(e) => Err(TrackerError::Configuration(format!("[{section}] {e}"))),
    }
}
