//! Layered configuration loading

use crate::components::{DatabaseConfig, LoggingConfig, ServerConfig};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides `server.host`
pub const ENV_HOST: &str = "STOREFRONT_HOST";
/// Overrides `server.port`
pub const ENV_PORT: &str = "STOREFRONT_PORT";
/// Overrides `database.path`
pub const ENV_DB_PATH: &str = "STOREFRONT_DB_PATH";
/// Overrides `logging.level`
pub const ENV_LOG: &str = "STOREFRONT_LOG";

/// An environment override that was present but could not be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredOverride {
    /// Variable name
    pub var: &'static str,
    /// Raw value found in the environment
    pub value: String,
    /// Parse failure
    pub reason: String,
}

impl fmt::Display for IgnoredOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ignoring invalid {}={:?}: {}", self.var, self.value, self.reason)
    }
}

/// Result of [`AppConfig::load`]
///
/// Loading usually happens before a subscriber is installed, so what was read
/// and what was skipped is kept here and reported through [`LoadedConfig::log`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// Effective configuration
    pub config: AppConfig,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
    /// Environment overrides that were skipped
    pub ignored: Vec<IgnoredOverride>,
}

impl LoadedConfig {
    /// Emit the load outcome as tracing events
    pub fn log(&self) {
        match &self.source {
            Some(path) => debug!(path = %path.display(), "Loaded config file"),
            None => debug!("No config file found, using defaults"),
        }
        for ignored in &self.ignored {
            warn!(var = ignored.var, value = %ignored.value, "{}", ignored);
        }
    }
}

/// Effective storefront configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// SQLite database
    pub database: DatabaseConfig,
    /// Log output
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration with precedence: defaults < file < env
    ///
    /// An explicit `config_file` must exist. Without one, the per-user
    /// default path is read when present.
    pub fn load(config_file: Option<&Path>) -> ConfigResult<LoadedConfig> {
        let (mut config, source) = Self::from_file_or_default(config_file)?;
        let ignored = config.apply_env();
        Ok(LoadedConfig {
            config,
            source,
            ignored,
        })
    }

    /// Default config file path: `<config_dir>/storefront/config.toml`
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("storefront");
        Ok(config_dir.join("config.toml"))
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(contents: &str, origin: &Path) -> ConfigResult<Self> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    fn from_file_or_default(
        config_file: Option<&Path>,
    ) -> ConfigResult<(Self, Option<PathBuf>)> {
        let path = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path()
                .ok()
                .filter(|path| path.exists()),
        };

        let Some(path) = path else {
            return Ok((Self::default(), None));
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&contents, &path)?;
        Ok((config, Some(path)))
    }

    /// Apply `STOREFRONT_*` environment overrides, returning the ones whose
    /// values could not be parsed
    pub fn apply_env(&mut self) -> Vec<IgnoredOverride> {
        let mut ignored = Vec::new();

        if let Ok(host) = std::env::var(ENV_HOST) {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var(ENV_PORT) {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(e) => ignored.push(IgnoredOverride {
                    var: ENV_PORT,
                    value: port,
                    reason: e.to_string(),
                }),
            }
        }
        if let Ok(path) = std::env::var(ENV_DB_PATH) {
            self.database.path = PathBuf::from(path);
        }
        if let Ok(level) = std::env::var(ENV_LOG) {
            self.logging.level = level;
        }
        ignored
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Render the configuration as JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn clear_env() {
        for key in [ENV_HOST, ENV_PORT, ENV_DB_PATH, ENV_LOG] {
            std::env::remove_var(key);
        }
    }

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:3001");
        assert_eq!(config.server.max_body_bytes(), 10 * 1024 * 1024);
        assert_eq!(config.database.path, PathBuf::from("./storefront.db"));
        assert_eq!(config.database.busy_timeout_ms, 5000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    #[serial]
    fn test_partial_file_keeps_defaults() {
        clear_env();
        let file = write_config(
            r#"
            [server]
            port = 8080

            [database]
            path = ":memory:"
            "#,
        );

        let loaded = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(loaded.source.as_deref(), Some(file.path()));
        assert!(loaded.ignored.is_empty());

        let config = loaded.config;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.path, PathBuf::from(":memory:"));
        assert!(config.database.foreign_keys);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_an_error() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let err = AppConfig::from_toml_str("[server\nport = 1", Path::new("bad.toml")).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, PathBuf::from("bad.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let file = write_config("[server]\nhost = \"0.0.0.0\"\nport = 4000\n");
        std::env::set_var(ENV_PORT, "5000");
        std::env::set_var(ENV_DB_PATH, "/tmp/shop.db");
        std::env::set_var(ENV_LOG, "debug");

        let config = AppConfig::load(Some(file.path())).unwrap().config;
        clear_env();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    #[serial]
    fn test_invalid_env_port_is_ignored() {
        clear_env();
        std::env::set_var(ENV_PORT, "not-a-port");

        let mut config = AppConfig::default();
        let ignored = config.apply_env();
        clear_env();

        assert_eq!(config.server.port, 3001);
        assert_eq!(ignored.len(), 1);
        assert_eq!(ignored[0].var, ENV_PORT);
        assert_eq!(ignored[0].value, "not-a-port");
        assert!(ignored[0]
            .to_string()
            .starts_with("Ignoring invalid STOREFRONT_PORT=\"not-a-port\""));
    }

    #[test]
    #[serial]
    fn test_bad_port_in_load_keeps_file_value() {
        clear_env();
        let file = write_config("[server]\nport = 4000\n");
        std::env::set_var(ENV_PORT, "70000");

        let loaded = AppConfig::load(Some(file.path())).unwrap();
        clear_env();

        assert_eq!(loaded.config.server.port, 4000);
        assert_eq!(loaded.ignored.len(), 1);
        assert_eq!(loaded.ignored[0].value, "70000");
    }

    #[test]
    fn test_render_formats() {
        let config = AppConfig::default();

        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[server]"));
        assert!(toml.contains("port = 3001"));
        assert_eq!(
            AppConfig::from_toml_str(&toml, Path::new("rendered.toml")).unwrap(),
            config
        );

        let json: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(json["database"]["busy_timeout_ms"], 5000);
        assert_eq!(json["logging"]["level"], "info");
    }
}
