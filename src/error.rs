//! Error types for nilo

use thiserror::Error;

/// Errors surfaced by the Optional container and its codec
#[derive(Error, Debug)]
pub enum OptionalError {
    /// Value access on an `Empty` optional
    #[error("called `Optional::get()` on an `Empty` value")]
    EmptyAccess,

    /// Malformed textual input
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Input rejected by the codec size guard
    #[error("Input of {len} bytes exceeds decode limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for nilo operations
pub type OptionalResult<T> = Result<T, OptionalError>;
