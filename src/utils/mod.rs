//! Utility modules: logging setup, environment access and logged result bridging

pub mod env;
pub mod error;
pub mod logging;

// Re-export commonly used items
pub use env::{env_bool, env_int, env_opt, env_or_default};
pub use error::{log_error, result_to_optional, with_default};
#[cfg(feature = "json-logging")]
pub use logging::init_json_logging;
pub use logging::{init_logging, init_logging_from_config};
