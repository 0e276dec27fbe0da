//! nilo - explicit, composable optional values
//!
//! This crate provides [`Optional<T>`], a container that is always in exactly
//! one of two states: `Present(v)` holding one value, or `Empty`. Calling
//! code works with presence through combinators instead of ad-hoc checks.
//!
//! ## Layout
//!
//! 1. `optional` - the container, its combinators and serde support
//! 2. `codec` - configurable JSON encode/decode, including decode-into-binding
//! 3. `config` - codec and logging configuration (JSON file + `NILO_*` env)
//! 4. `error` - the [`OptionalError`] taxonomy
//! 5. `utils` - logging initialization, env helpers, logged result bridging
//!
//! ## Error model
//!
//! Only three places ever fail:
//! - `get`, `get_mut` and `into_inner` panic on `Empty` (a caller bug)
//! - `or_panic` panics with the caller's message on `Empty`
//! - decoding returns an [`OptionalError`]
//!
//! Every other combinator treats `Empty` as a silent short-circuit.
//!
//! ```rust
//! use nilo::Optional;
//!
//! let name = Optional::of_nullable(std::env::var("NILO_DOC_USER").ok())
//!     .filter(|n| !n.is_empty())
//!     .or_else_get(|| "anonymous".to_string());
//! assert!(!name.is_empty());
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod optional;
pub mod utils;

pub use codec::Codec;
pub use config::{CodecConfig, LoggingConfig, NiloConfig};
pub use error::{OptionalError, OptionalResult};
pub use optional::Optional;
