//! Scoped async transport session

use domain::TrackerError;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::{HttpClientConfig, decode_body, redacted, status_error};

/// An open connection session for async requests
///
/// The session is acquired with [`HttpSession::open`] and released when it
/// is closed or dropped, so release also happens when a caller bails out
/// with `?` or panics. Requests borrow the session, which lets several be
/// awaited concurrently (e.g. with `futures::join!`) and prevents any of
/// them from outliving it.
#[derive(Debug)]
pub struct HttpSession {
    inner: Client,
}

impl HttpSession {
    /// Open a session
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the underlying client cannot be built.
    pub fn open(config: &HttpClientConfig) -> Result<Self, TrackerError> {
        let inner = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| TrackerError::ConnectionFailed(e.to_string()))?;
        debug!("HTTP session opened");
        Ok(Self { inner })
    }

    /// Issue a GET and decode the JSON body
    ///
    /// # Errors
    ///
    /// `ConnectionFailed` on network failure, `RequestFailed` on a non-2xx
    /// status, `ParseError` if the body is not JSON.
    #[instrument(skip_all, fields(url = %redacted(url)))]
    pub async fn get_json(&self, url: &Url) -> Result<Value, TrackerError> {
        debug!("Sending request");

        let response = self
            .inner
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TrackerError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Response received");

        let body = response
            .text()
            .await
            .map_err(|e| TrackerError::ConnectionFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        decode_body(&body)
    }

    /// Close the session
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for HttpSession {
    fn drop(&mut self) {
        debug!("HTTP session closed");
    }
}
