//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters, and
//! providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
    let path = Path::new(path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: AppConfig =
        toml::from_str(&content).with_context(|| "Failed to parse config.toml")?;

    validate_config(&config)?;

    info!(
        name = %config.app.name,
        port = config.server.port,
        mode = ?config.storage.mode,
        data_dir = %config.storage.data_dir,
        "Configuration loaded successfully"
    );

    Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
    anyhow::ensure!(!config.app.name.is_empty(), "app.name must not be empty");

    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    anyhow::ensure!(
        LEVELS.contains(&config.app.log_level.as_str()),
        "app.log_level must be one of {:?}, got '{}'",
        LEVELS,
        config.app.log_level
    );

    anyhow::ensure!(
        config.server.port != 0,
        "server.port must be non-zero, got {}",
        config.server.port
    );
    anyhow::ensure!(
        !config.server.host.is_empty(),
        "server.host must not be empty"
    );

    anyhow::ensure!(
        !config.storage.data_dir.is_empty(),
        "storage.data_dir must not be empty"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::StorageMode;

    use super::*;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_minimal_config_applies_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            name = "tribute-api"

            [server]

            [storage]
            "#,
        )
        .unwrap();

        assert!(validate_config(&config).is_ok());
        assert_eq!(config.app.log_level, "info");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.mode, StorageMode::Persistent);
        assert_eq!(config.storage.data_dir, "data");
    }

    #[test]
    fn test_ephemeral_mode_resolves_under_temp_dir() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            name = "tribute-api"

            [server]

            [storage]
            mode = "ephemeral"
            "#,
        )
        .unwrap();

        let dir = config.storage.resolve_dir();
        assert!(dir.starts_with(std::env::temp_dir()));
        assert!(dir.ends_with("data"));
    }

    #[test]
    fn test_zero_port_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            name = "tribute-api"

            [server]
            port = 0

            [storage]
            "#,
        )
        .unwrap();

        assert!(validate_config(&config).is_err());
    }
}
