//! # Storefront Configuration
//!
//! Typed configuration for the storefront server and CLI.
//!
//! Values are layered with increasing precedence:
//!
//! 1. Built-in defaults
//! 2. A TOML file (explicit path, else `<config_dir>/storefront/config.toml`)
//! 3. `STOREFRONT_*` environment variables
//! 4. Command-line flags, applied by the caller
//!
//! ```rust,no_run
//! use storefront_config::AppConfig;
//!
//! let config = AppConfig::load(None)?.config;
//! println!("listening on {}", config.server.bind_address());
//! # Ok::<(), storefront_config::ConfigError>(())
//! ```

#![warn(missing_docs)]

mod components;
mod error;
mod loader;

pub use components::*;
pub use error::{ConfigError, ConfigResult};
pub use loader::*;
