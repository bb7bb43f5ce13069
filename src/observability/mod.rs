//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (operators, log aggregation)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging through `tracing`
//! - Request ID flows through the HTTP layer into log spans
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
