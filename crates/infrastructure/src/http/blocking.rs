//! Blocking transport invoker

use domain::TrackerError;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::{HttpClientConfig, decode_body, redacted, status_error};

/// One-request-per-call blocking HTTP client
///
/// Each call is independent; the client holds no state besides the
/// connection pool of the underlying `reqwest::blocking::Client`. Like that
/// client, it must not be created or dropped inside an async runtime.
#[derive(Debug, Clone)]
pub struct BlockingHttpClient {
    inner: Client,
}

impl BlockingHttpClient {
    /// Create a client with default configuration
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the underlying client cannot be built.
    pub fn new() -> Result<Self, TrackerError> {
        Self::with_config(&HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the underlying client cannot be built.
    pub fn with_config(config: &HttpClientConfig) -> Result<Self, TrackerError> {
        let inner = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| TrackerError::ConnectionFailed(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Issue a GET and decode the JSON body
    ///
    /// # Errors
    ///
    /// `ConnectionFailed` on network failure, `RequestFailed` on a non-2xx
    /// status, `ParseError` if the body is not JSON.
    #[instrument(skip_all, fields(url = %redacted(url)))]
    pub fn get_json(&self, url: &Url) -> Result<Value, TrackerError> {
        debug!("Sending blocking request");

        let response = self
            .inner
            .get(url.clone())
            .send()
            .map_err(|e| TrackerError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Response received");

        let body = response
            .text()
            .map_err(|e| TrackerError::ConnectionFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        decode_body(&body)
    }
}
