//! HTTP transport for the tracker clients
//!
//! Two interchangeable invokers issue exactly one GET per call and return
//! the decoded JSON body: [`BlockingHttpClient`] for synchronous callers and
//! [`HttpSession`] for async callers. Neither retries nor applies timeouts.

mod blocking;
mod session;

pub use blocking::BlockingHttpClient;
pub use session::HttpSession;

use domain::{QueryParams, TrackerError};
use serde_json::Value;
use url::Url;

/// Longest response body kept in a `RequestFailed` error
const MAX_ERROR_BODY: usize = 512;

/// Settings shared by both invokers
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("WindyTracker/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Set the user agent string
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Assemble a request URL from a base, an endpoint subroute and parameters
///
/// The base must end with `/` so the subroute is appended rather than
/// replacing the last path segment.
///
/// # Errors
///
/// Returns `Configuration` if the subroute cannot be joined onto the base.
pub fn build_url(base: &Url, endpoint: &str, params: &QueryParams) -> Result<Url, TrackerError> {
    let mut url = base
        .join(endpoint)
        .map_err(|e| TrackerError::Configuration(format!("invalid endpoint {endpoint:?}: {e}")))?;
    if params.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&params.encode()));
    }
    Ok(url)
}

/// Map a non-success status to `RequestFailed`, keeping the start of the body
fn status_error(status: u16, body: &str) -> TrackerError {
    let body = match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    };
    TrackerError::RequestFailed { status, body }
}

fn decode_body(body: &str) -> Result<Value, TrackerError> {
    serde_json::from_str(body).map_err(|e| TrackerError::ParseError(e.to_string()))
}

/// URL with the `key` parameter masked, for logging
fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    if !pairs.is_empty() {
        shown.query_pairs_mut().clear().extend_pairs(pairs);
    }
    shown.to_string()
}
