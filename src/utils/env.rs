//! Environment variable utilities
//!
//! Provides helpers for reading environment variables as `Optional` values.

use crate::optional::Optional;

/// Get environment variable or return default value
///
/// # Example
/// ```rust
/// use nilo::utils::env_or_default;
///
/// let dir = env_or_default("NILO_DOC_UNSET_DIR", "data");
/// assert_eq!(dir, "data");
/// ```
pub fn env_or_default(key: &str, default: &str) -> String {
    env_opt(key).or_else_get(|| default.to_string())
}

/// Get environment variable as Optional
///
/// Returns `Present(value)` if set to valid unicode, `Empty` otherwise.
pub fn env_opt(key: &str) -> Optional<String> {
    Optional::from_result(std::env::var(key))
}

/// Get environment variable as boolean
///
/// Returns `true` if value is "true", "1", "yes", "on" (case-insensitive).
/// Returns `false` otherwise or if not set.
pub fn env_bool(key: &str) -> bool {
    env_opt(key).is_present_and(|v| {
        let v_lower = v.to_lowercase();
        v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
    })
}

/// Get environment variable as integer
///
/// Returns `Present(value)` if set and parseable, `Empty` otherwise.
pub fn env_int<T>(key: &str) -> Optional<T>
where
    T: std::str::FromStr,
{
    env_opt(key).and_then_result(|v| v.trim().parse())
}
