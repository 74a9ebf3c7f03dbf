//! Bus Tracker client configuration

use std::path::Path;

use domain::{QueryParams, TrackerError};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration section name used by [`BusTrackerConfig::load`]
pub const CONFIG_SECTION: &str = "bus";

/// Configuration for the Bus Tracker API client
#[derive(Clone, Serialize, Deserialize)]
pub struct BusTrackerConfig {
    /// Developer API key (sensitive - uses SecretString)
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Response language code (default: en)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// URL scheme, `https` or `http` (default: https)
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// API host name, optionally with a port (default: ctabustracker.com)
    #[serde(default = "default_domain")]
    pub domain: String,
}

impl std::fmt::Debug for BusTrackerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusTrackerConfig")
            .field("api_key", &"[REDACTED]")
            .field("locale", &self.locale)
            .field("scheme", &self.scheme)
            .field("domain", &self.domain)
            .finish()
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_domain() -> String {
    "ctabustracker.com".to_string()
}

impl BusTrackerConfig {
    /// Create a configuration with default locale, scheme and domain
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            locale: default_locale(),
            scheme: default_scheme(),
            domain: default_domain(),
        }
    }

    /// Create a configuration suitable for testing against a local server
    #[must_use]
    pub fn for_testing(domain: impl Into<String>) -> Self {
        Self::new("test-key").with_scheme("http").with_domain(domain)
    }

    /// Load the `[bus]` section from an optional file and the environment
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if loading fails or the result is invalid.
    pub fn load(file: Option<&Path>) -> Result<Self, TrackerError> {
        let config: Self = infrastructure::load_section(CONFIG_SECTION, file)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the response language
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
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

    /// Versioned base URL, `{scheme}://{domain}/bustime/api/v3/`
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if scheme and domain do not form a URL.
    pub fn base_url(&self) -> Result<Url, TrackerError> {
        let raw = format!("{}://{}/bustime/api/v3/", self.scheme, self.domain);
        Url::parse(&raw).map_err(|e| TrackerError::Configuration(format!("invalid base URL {raw:?}: {e}")))
    }

    /// Parameters sent with every request: `key`, `format=json`, `locale`
    #[must_use]
    pub fn base_params(&self) -> QueryParams {
        QueryParams::new()
            .with("key", self.api_key.expose_secret())
            .with("format", "json")
            .with("locale", self.locale.as_str())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the key, locale or domain is empty, or the
    /// scheme is not `http`/`https`.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(TrackerError::Configuration("api_key must not be empty".to_string()));
        }

        if self.locale.trim().is_empty() {
            return Err(TrackerError::Configuration("locale must not be empty".to_string()));
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
        let config = BusTrackerConfig::new("abc");
        assert_eq!(config.locale, "en");
        assert_eq!(config.scheme, "https");
        assert_eq!(config.domain, "ctabustracker.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url() {
        let url = BusTrackerConfig::new("abc").base_url().unwrap();
        assert_eq!(url.as_str(), "https://ctabustracker.com/bustime/api/v3/");
    }

    #[test]
    fn test_base_params() {
        let params = BusTrackerConfig::new("abc").with_locale("es").base_params();
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, [("key", "abc"), ("format", "json"), ("locale", "es")]);
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", BusTrackerConfig::new("super-secret"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_serialization_skips_key() {
        let json = serde_json::to_string(&BusTrackerConfig::new("super-secret")).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(json.contains("ctabustracker.com"));
    }

    #[test]
    fn test_deserialization_applies_defaults() {
        let config: BusTrackerConfig = serde_json::from_str(r#"{"api_key":"k"}"#).unwrap();
        assert_eq!(config.api_key.expose_secret(), "k");
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn test_validation_empty_key() {
        assert!(BusTrackerConfig::new("  ").validate().is_err());
    }

    #[test]
    fn test_validation_bad_scheme() {
        let config = BusTrackerConfig::new("k").with_scheme("ftp");
        assert!(matches!(config.validate(), Err(TrackerError::Configuration(_))));
    }

    #[test]
    fn test_validation_empty_locale_and_domain() {
        assert!(BusTrackerConfig::new("k").with_locale("").validate().is_err());
        assert!(BusTrackerConfig::new("k").with_domain("").validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[bus]\napi_key = \"from-file\"\nlocale = \"es\"").unwrap();

        let config = BusTrackerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api_key.expose_secret(), "from-file");
        assert_eq!(config.locale, "es");
        assert_eq!(config.domain, "ctabustracker.com");
    }
}
