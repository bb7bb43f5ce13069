//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, overridable through `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Credentials and raw RPC errors stay out of HTTP responses; full detail
//!   goes to the log

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter used when `RUST_LOG` is not set.
pub fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("lnhub={level},tower_http={level}"))
        .unwrap_or_else(|_| EnvFilter::new("lnhub=info,tower_http=info"))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_accepts_levels() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let filter = default_filter(level);
            assert!(filter.to_string().contains(level));
        }
    }

    #[test]
    fn test_bad_level_falls_back() {
        let filter = default_filter("loud");
        assert!(filter.to_string().contains("info"));
    }

    #[test]
    fn test_init_twice() {
        init_logging("debug");
        init_logging("info");
    }
}
