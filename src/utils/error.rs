//! Error handling utilities for graceful degradation
//!
//! Logged counterparts of [`Optional::from_result`]: the error is reported
//! through `tracing` before being dropped.

use tracing::{debug, warn};

use crate::optional::Optional;

/// Execute an operation and log errors without failing
///
/// Returns `Present(T)` on success, `Empty` on error (after logging).
/// Useful for non-critical operations that should not stop execution.
///
/// # Example
/// ```rust
/// use nilo::utils::log_error;
///
/// let port = log_error(|| "80".parse::<u16>(), "Failed to parse port");
/// assert_eq!(port.or_else(0), 80);
/// ```
pub fn log_error<F, T, E>(operation: F, context: &str) -> Optional<T>
where
    F: FnOnce() -> Result<T, E>,
    E: std::fmt::Display,
{
    result_to_optional(operation(), context)
}

/// Convert a Result to an Optional, logging the error
///
/// Returns `Present(T)` on success, `Empty` on error (after logging).
pub fn result_to_optional<T, E>(result: Result<T, E>, context: &str) -> Optional<T>
where
    E: std::fmt::Display,
{
    match result {
        Ok(value) => Optional::of(value),
        Err(e) => {
            warn!("{}: {}", context, e);
            Optional::empty()
        }
    }
}

/// Execute an operation and fall back to `default` on error
///
/// The failure is logged at debug level, since callers reaching for a
/// default expect it to happen.
///
/// # Example
/// ```rust
/// use nilo::utils::with_default;
///
/// assert_eq!(with_default(|| "x".parse::<u16>(), 8080, "port"), 8080);
/// ```
pub fn with_default<F, T, E>(operation: F, default: T, context: &str) -> T
where
    F: FnOnce() -> Result<T, E>,
    E: std::fmt::Display,
{
    Optional::from_result(operation().map_err(|e| {
        debug!("{}: {}, using default", context, e);
    }))
    .or_else(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_error() {
        assert_eq!(log_error(|| "7".parse::<i32>(), "parse"), Optional::of(7));
        assert!(log_error(|| "x".parse::<i32>(), "parse").is_empty());
    }

    #[test]
    fn test_result_to_optional() {
        let ok: Result<u8, String> = Ok(1);
        let err: Result<u8, String> = Err("boom".to_string());
        assert_eq!(result_to_optional(ok, "ctx"), Optional::of(1));
        assert!(result_to_optional(err, "ctx").is_empty());
    }

    #[test]
    fn test_with_default() {
        assert_eq!(with_default(|| "5".parse::<u8>(), 0, "parse"), 5);
        assert_eq!(with_default(|| "-5".parse::<u8>(), 0, "parse"), 0);
    }

    #[test]
    fn test_with_default_feeds_optional_chain() {
        let limit = Optional::of("64")
            .map_to(|raw| with_default(|| raw.parse::<usize>(), 16, "limit"))
            .filter(|n| *n > 0);
        assert_eq!(limit, Optional::of(64));

        let fallback = Optional::of("sixty")
            .map_to(|raw| with_default(|| raw.parse::<usize>(), 16, "limit"));
        assert_eq!(fallback, Optional::of(16));
    }
}
