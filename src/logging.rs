//! Logging initialization for the cinema-session binary.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `CINEMA_LOG` environment variable. Falls back to the configured level when
//! the variable is unset or invalid.
//!
//! # Usage
//!
//! ```bash
//! # Configured level (default: warn)
//! cinema-session snapshot
//!
//! # Debug level
//! CINEMA_LOG=debug cinema-session visit watchlist
//!
//! # Module-specific filtering
//! CINEMA_LOG=cinema_session::store=trace,warn cinema-session reset
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "CINEMA_LOG";

/// Builds the filter from `CINEMA_LOG`, or from `fallback` when unset or invalid.
pub fn filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback.as_directive()))
}

/// Initialize the tracing subscriber.
///
/// Output goes to stderr so stdout stays reserved for JSON snapshots.
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init(fallback: LogLevel) {
    let _ = fmt()
        .with_env_filter(filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
