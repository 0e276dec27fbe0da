//! Configuration management for nilo
//!
//! Handles configuration loading (JSON file and `NILO_*` environment
//! variables) and validation for the codec and logging layers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OptionalError;
use crate::optional::Optional;
use crate::utils::env::{env_bool, env_opt};

/// Environment variable toggling pretty-printed JSON output
pub const ENV_CODEC_PRETTY: &str = "NILO_CODEC_PRETTY";
/// Environment variable setting the decode size limit in bytes
pub const ENV_CODEC_MAX_INPUT_LEN: &str = "NILO_CODEC_MAX_INPUT_LEN";
/// Environment variable holding a log filter
pub const ENV_LOG_FILTER: &str = "NILO_LOG_FILTER";
/// Environment variable toggling JSON log output
pub const ENV_LOG_JSON: &str = "NILO_LOG_JSON";

/// JSON codec configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Emit indented JSON
    #[serde(default)]
    pub pretty: bool,

    /// Reject inputs longer than this many bytes (Empty = unlimited)
    #[serde(default)]
    pub max_input_len: Optional<usize>,
}

impl CodecConfig {
    /// Validate codec configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_input_len == Optional::of(0) {
            return Err(OptionalError::Configuration(
                "max_input_len must be greater than 0 (omit it for no limit)".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter, e.g. "info" or "nilo=debug" (RUST_LOG still takes precedence)
    #[serde(default)]
    pub filter: Optional<String>,

    /// Emit JSON-formatted logs (requires the `json-logging` feature)
    #[serde(default)]
    pub json_format: bool,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NiloConfig {
    /// Codec configuration
    #[serde(default)]
    pub codec: CodecConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: Optional<LoggingConfig>,
}

impl NiloConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: NiloConfig = serde_json::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build a configuration from defaults plus environment overrides
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `NILO_*` environment variables on top of the current values
    ///
    /// Unset variables leave the corresponding field alone. A set but
    /// unparseable size limit is an error rather than silently ignored.
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if env_opt(ENV_CODEC_PRETTY).is_present() {
            self.codec.pretty = env_bool(ENV_CODEC_PRETTY);
        }

        if let Optional::Present(raw) = env_opt(ENV_CODEC_MAX_INPUT_LEN) {
            let limit = raw.trim().parse::<usize>().map_err(|_| {
                OptionalError::Configuration(format!(
                    "{} must be an integer, got {:?}",
                    ENV_CODEC_MAX_INPUT_LEN, raw
                ))
            })?;
            self.codec.max_input_len.insert(limit);
        }

        env_opt(ENV_LOG_FILTER).consume(|filter| {
            self.logging.get_or_insert_with(LoggingConfig::default).filter.insert(filter);
        });

        if env_opt(ENV_LOG_JSON).is_present() {
            self.logging
                .get_or_insert_with(LoggingConfig::default)
                .json_format = env_bool(ENV_LOG_JSON);
        }

        debug!(config = ?self, "Applied environment overrides");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.codec.validate()
    }
}
