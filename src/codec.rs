//! JSON codec for `Optional`
//!
//! Thin, configurable layer over the serde implementation: `Empty` encodes
//! as `null`, `Present(v)` as the JSON encoding of `v`. Decoding into an
//! existing binding never leaves it half-updated: on any error the binding
//! is `Empty`.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::config::CodecConfig;
use crate::error::{OptionalError, OptionalResult};
use crate::optional::Optional;

/// Encoder/decoder for `Optional` values
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with the given configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Get the codec configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode an optional as JSON text
    pub fn encode<T: Serialize>(&self, value: &Optional<T>) -> OptionalResult<String> {
        let encoded = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|e| {
            debug!("Failed to encode optional: {}", e);
            OptionalError::from(e)
        })
    }

    /// Decode JSON text into an optional
    ///
    /// `null` yields `Empty`; any other well-formed value is decoded as `T`.
    pub fn decode<T: DeserializeOwned>(&self, input: &str) -> OptionalResult<Optional<T>> {
        self.check_len(input)?;
        serde_json::from_str(input.trim()).map_err(|e| {
            debug!("Failed to decode optional: {}", e);
            OptionalError::from(e)
        })
    }

    /// Decode JSON text into an existing binding
    ///
    /// On success the binding holds the decoded state. On failure the error
    /// is returned and the binding is left `Empty`.
    pub fn decode_into<T: DeserializeOwned>(
        &self,
        target: &mut Optional<T>,
        input: &str,
    ) -> OptionalResult<()> {
        target.take();
        *target = self.decode(input)?;
        Ok(())
    }

    fn check_len(&self, input: &str) -> OptionalResult<()> {
        if let Optional::Present(limit) = self.config.max_input_len {
            if input.len() > limit {
                warn!(len = input.len(), limit, "Rejecting oversized optional input");
                return Err(OptionalError::InputTooLarge {
                    len: input.len(),
                    limit,
                });
            }
        }
        Ok(())
    }
}

/// Encode with the default codec
pub fn to_json<T: Serialize>(value: &Optional<T>) -> OptionalResult<String> {
    Codec::default().encode(value)
}

/// Decode with the default codec
pub fn from_json<T: DeserializeOwned>(input: &str) -> OptionalResult<Optional<T>> {
    Codec::default().decode(input)
}

/// Decode into an existing binding with the default codec
///
/// # Example
/// ```rust
/// use nilo::{codec, Optional};
///
/// let mut port = Optional::of(80u16);
/// assert!(codec::decode_into(&mut port, "\"not a port\"").is_err());
/// assert!(port.is_empty());
///
/// codec::decode_into(&mut port, "8080").unwrap();
/// assert_eq!(port, Optional::of(8080));
/// ```
pub fn decode_into<T: DeserializeOwned>(target: &mut Optional<T>, input: &str) -> OptionalResult<()> {
    Codec::default().decode_into(target, input)
}
