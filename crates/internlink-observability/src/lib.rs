//! # InternLink Observability
//!
//! - [`logging`]: tracing subscriber setup and per-request logging middleware
//! - [`metrics`]: Prometheus recorder, HTTP metrics middleware and business counters
//!
//! # Example
//!
//! ```ignore
//! use internlink_observability::{init_metrics, init_tracing};
//!
//! init_tracing(telemetry.log_dir.as_deref())?;
//! let handle = init_metrics(telemetry.metrics_enabled)?;
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, logging_middleware};
pub use metrics::{
    init_metrics, metrics_middleware, metrics_router, track_approval, track_internship_transition,
    track_login,
};

pub use metrics_exporter_prometheus::PrometheusHandle;
