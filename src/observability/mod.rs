//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, stderr)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → Terminal or log aggregation
//!     → Metrics endpoint (Prometheus scrape, watch mode only)
//! ```
//!
//! # Design Decisions
//! - stdout is reserved for resolution output
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
