//! Configuration Module - TOML-based Service Configuration
//!
//! Loads and validates configuration from `config.toml`. The storage
//! location and environment mode live here explicitly; nothing in the
//! store consults ambient environment variables.

pub mod loader;

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level service configuration.
///
/// Loaded from `config.toml` at startup and validated before the
/// server starts.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Service identity and logging.
    pub app: AppSection,
    /// HTTP server binding.
    pub server: ServerConfig,
    /// Collection storage location and mode.
    pub storage: StorageConfig,
}

/// Service identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    /// Human-readable service name.
    pub name: String,
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Collection storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Where collection files live relative to the deployment.
    #[serde(default)]
    pub mode: StorageMode,
    /// Directory name (or path) holding the collection files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

/// Deployment storage mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Project-relative directory that survives restarts.
    #[default]
    Persistent,
    /// OS temp directory, for ephemeral/serverless-style deployments.
    Ephemeral,
}

impl StorageConfig {
    /// Resolve the on-disk data directory for this deployment.
    pub fn resolve_dir(&self) -> PathBuf {
        match self.mode {
            StorageMode::Ephemeral => std::env::temp_dir().join(&self.data_dir),
            StorageMode::Persistent => PathBuf::from(&self.data_dir),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_dir() -> String {
    "data".to_string()
}
