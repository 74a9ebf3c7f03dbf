//! Tracing subscriber setup
//!
//! The library itself only emits `tracing` events; embedding programs and
//! the wiremock suites call [`init_tracing`] or [`init_telemetry`] to see them.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry, init_tracing};
