//! Observability for the Velocity board tools.
//!
//! - **Logging**: human-readable and JSON output via `tracing-subscriber`
//! - **Metrics**: labelled counters and gauges with Prometheus text export

pub mod logging;
pub mod metrics;
