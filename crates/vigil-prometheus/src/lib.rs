//! Prometheus gauge instrumentation for vigil health checks.
//!
//! This crate exposes the status and duration of registered health checks as two pull-model gauges on a [`prometheus::Registry`].
//!
//! ## Example
//! ```rust,no_run
//! use std::sync::Arc;
//! use vigil_core::{CheckRegistry, CheckResult};
//! use vigil_prometheus::{InstrumentationBuilder, Registry};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut checks = CheckRegistry::new();
//! checks.register_fn("db", || async { CheckResult::healthy() })?;
//!
//! let registry = Registry::new();
//! InstrumentationBuilder::new()
//!     .with_source(Arc::new(checks))
//!     .register(&registry)?;
//!
//! // Expose /metrics with your HTTP framework:
//! // let families = registry.gather();
//! // let encoder = prometheus::TextEncoder::new();
//! // encoder.encode(&families, &mut response_buffer)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `healthcheck_status{name}` - Gauge, 1 healthy / 0.5 degraded / 0 unhealthy
//! - `healthcheck_duration_seconds{name}` - Gauge, wall-clock check duration
//!
//! Both gauges are filled at scrape time from a single health-check
//! execution per scrape: they share a [`vigil_core::ReportCache`] that
//! pairs their back-to-back collect calls.
//!
//! ## HTTP server
//! This crate does NOT provide an HTTP server for the `/metrics` endpoint.
//! Use your application's existing HTTP framework (axum, warp, etc); see
//! `demos/http-server` in this workspace.

mod error;
pub use error::InstrumentError;

mod options;
pub use options::InstrumentationOptions;

mod collector;
mod runtime;

mod instrument;
pub use instrument::InstrumentationBuilder;

pub use prometheus::{Encoder, Registry, TextEncoder};
