//! Train Tracker client configuration

use std::path::Path;

use domain::{QueryParams, TrackerError};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration section name used by [`TrainTrackerConfig::load`]
pub const CONFIG_SECTION: &str = "train";

/// Configuration for the Train Tracker API client
#[derive(Clone, Serialize, Deserialize)]
pub struct TrainTrackerConfig {
    /// Developer API key (sensitive - uses SecretString)
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// URL scheme, `https` or `http` (default: https)
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// API host name, optionally with a port (default: lapi.transitchicago.com)
    #[serde(default = "default_domain")]
    pub domain: String,
}

impl std::fmt::Debug for TrainTrackerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainTrackerConfig")
            .field("api_key", &"[REDACTED]")
            .field("scheme", &self.scheme)
            .field("domain", &self.domain)
            .finish()
    }
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_domain() -> String {
    "lapi.transitchicago.com".to_string()
}

impl TrainTrackerConfig {
    /// Create a configuration with default scheme and domain
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            scheme: default_scheme(),
            domain: default_domain(),
        }
    }

    /// Create a configuration suitable for testing against a local server
    #[must_use]
    pub fn for_testing(domain: impl Into<String>) -> Self {
        Self::new("test-key").with_scheme("http").with_domain(domain)
    }

    /// Load the `[train]` section from an optional file and the environment
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if loading fails or the result is invalid.
    pub fn load(file: Option<&Path>) -> Result<Self, TrackerError> {
        let config: Self = infrastructure::load_section(CONFIG_SECTION, file)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the URL scheme
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set the API host
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Versioned base URL, `{scheme}://{domain}/api/1.0/`
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if scheme and domain do not form a URL.
    pub fn base_url(&self) -> Result<Url, TrackerError> {
        let raw = format!("{}://{}/api/1.0/", self.scheme, self.domain);
        Url::parse(&raw).map_err(|e| TrackerError::Configuration(format!("invalid base URL {raw:?}: {e}")))
    }

    /// Parameters sent with every request: `key`, `outputType=JSON`
    #[must_use]
    pub fn base_params(&self) -> QueryParams {
        QueryParams::new()
            .with("key", self.api_key.expose_secret())
            .with("outputType", "JSON")
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the key or domain is empty, or the scheme
    /// is not `http`/`https`.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(TrackerError::Configuration("api_key must not be empty".to_string()));
        }

        if !matches!(self.scheme.as_str(), "http" | "https") {
            return Err(TrackerError::Configuration(format!(
                "scheme must be http or https, got: {}",
                self.scheme
            )));
        }

        if self.domain.trim().is_empty() {
            return Err(TrackerError::Configuration("domain must not be empty".to_string()));
        }

        self.base_url().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = TrainTrackerConfig::new("abc");
        assert_eq!(config.scheme, "https");
        assert_eq!(config.domain, "lapi.transitchicago.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_and_params() {
        let config = TrainTrackerConfig::new("abc");
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://lapi.transitchicago.com/api/1.0/"
        );
        assert_eq!(config.base_params().encode(), "key=abc&outputType=JSON");
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", TrainTrackerConfig::new("super-secret"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_validation() {
        assert!(TrainTrackerConfig::new("").validate().is_err());
        assert!(TrainTrackerConfig::new("k").with_scheme("gopher").validate().is_err());
        assert!(TrainTrackerConfig::new("k").with_domain(" ").validate().is_err());
        assert!(TrainTrackerConfig::for_testing("127.0.0.1:8080").validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[train]\napi_key = \"from-file\"\nscheme = \"http\"").unwrap();

        let config = TrainTrackerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api_key.expose_secret(), "from-file");
        assert_eq!(config.scheme, "http");
        assert_eq!(config.domain, "lapi.transitchicago.com");
    }

    #[test]
    fn test_load_without_key_fails() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[train]\napi_key = \"\"").unwrap();
        assert!(TrainTrackerConfig::load(Some(file.path())).is_err());
    }
}
