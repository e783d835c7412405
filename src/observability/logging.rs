//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, `--verbose`, or `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Logs go to stderr; stdout carries results only
//! - `RUST_LOG` wins over the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a log level.
pub fn default_directive(level: &str) -> String {
    format!("segment_router={}", level)
}

/// Initialize the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(level).into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("debug"), "segment_router=debug");
    }

    #[test]
    fn test_init_twice() {
        init_logging("info");
        init_logging("debug");
    }
}
