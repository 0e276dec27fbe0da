//! Logging utilities
//!
//! Simple logging initialization for applications built on nilo:
//! - Respects RUST_LOG environment variable
//! - Allows configuration via [`LoggingConfig`]
//! - Optional JSON output behind the `json-logging` feature
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the application, at most once per process.
//!
//! # Usage
//! ```rust,no_run
//! use nilo::utils::init_logging;
//!
//! init_logging(None); // Uses RUST_LOG or defaults to "info"
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::optional::Optional;

const DEFAULT_FILTER: &str = "info";

/// Directive to use when RUST_LOG is unset: `filter`, else "info"
///
/// Empty when RUST_LOG is set, which always takes precedence.
fn configured_directive(filter: Optional<&str>) -> Optional<String> {
    if std::env::var("RUST_LOG").is_ok() {
        return Optional::empty();
    }
    Optional::of(filter.or_else(DEFAULT_FILTER).to_string())
}

fn resolve_filter(filter: Optional<&str>) -> EnvFilter {
    configured_directive(filter).map_or_else(EnvFilter::from_default_env, EnvFilter::new)
}

/// Initialize human-readable logging
///
/// # Arguments
/// * `filter` - Optional log filter (e.g. "debug", "nilo=trace").
///              RUST_LOG takes precedence; without either, "info" is used.
pub fn init_logging(filter: Option<&str>) {
    let env_filter = resolve_filter(Optional::of_nullable(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::env::var("NO_COLOR").is_err()),
        )
        .with(env_filter)
        .init();
}

/// Initialize logging with JSON output (for log aggregation)
#[cfg(feature = "json-logging")]
pub fn init_json_logging(filter: Option<&str>) {
    let env_filter = resolve_filter(Optional::of_nullable(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_span_list(true),
        )
        .with(env_filter)
        .init();
}

/// Initialize logging from a [`LoggingConfig`]
///
/// RUST_LOG always takes precedence over the configured filter.
pub fn init_logging_from_config(config: Option<&LoggingConfig>) {
    let config = Optional::of_nullable(config);
    let filter = config.and_then(|c| c.filter.as_ref()).map_to(String::as_str);

    if config.is_present_and(|c| c.json_format) {
        #[cfg(feature = "json-logging")]
        {
            init_json_logging(filter.into_option());
        }
        #[cfg(not(feature = "json-logging"))]
        {
            // Fall back to regular logging if json-logging feature not enabled
            init_logging(filter.into_option());
        }
    } else {
        init_logging(filter.into_option());
    }
}
