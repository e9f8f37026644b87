//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Failure while locating, reading or rendering configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`AppConfig`](crate::AppConfig)
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Rendering the effective configuration failed
    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    /// The platform has no per-user configuration directory
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
