//! Infrastructure layer - Transport and process plumbing
//!
//! Issues the HTTP requests for both tracker clients, loads layered
//! configuration and installs the tracing subscriber.

pub mod http;
pub mod settings;
pub mod telemetry;

pub use http::{BlockingHttpClient, HttpClientConfig, HttpSession, build_url};
pub use settings::{ENV_PREFIX, load_section};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry, init_tracing};
