//! HTTP server configuration

use serde::{Deserialize, Serialize};

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Largest accepted request body
    pub max_body_size_mb: usize,
    /// Origins allowed by CORS; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Body limit in bytes
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            max_body_size_mb: 10,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}
