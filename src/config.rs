// ⚙️ Configuration - defaults < TOML file < DESTINY__* environment
//
//   DESTINY__SERVER__BIND_ADDR=127.0.0.1:8080
//   DESTINY__LOGGING__LEVEL=debug
//   DESTINY__PALM__ADVANCED=true

use crate::error::{Result, ScannerError};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "destiny-scanner.toml";
pub const ENV_PREFIX: &str = "DESTINY";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub palm: PalmConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Allow any origin (the browser front-end runs on another port)
    pub cors_permissive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PalmConfig {
    /// Default palm analysis mode when a caller does not choose one
    pub advanced: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: "0.0.0.0:3000".to_string(),
            cors_permissive: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl ScannerConfig {
    /// Load with the default env prefix.
    ///
    /// An explicit path must exist; the default `destiny-scanner.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p.to_path_buf()).required(true),
            None => File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: ScannerConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ScannerError::Config(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind_addr.parse().map_err(|e| {
            ScannerError::Config(format!(
                "server.bind_addr '{}': {}",
                self.server.bind_addr, e
            ))
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("destiny-scanner.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = ScannerConfig::default();
        assert_eq!(config.server.bind_addr, "0.0.0.0:3000");
        assert!(config.server.cors_permissive);
        assert_eq!(config.logging.level, "info");
        assert!(!config.palm.advanced);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[server]
bind_addr = "127.0.0.1:8080"

[palm]
advanced = true
"#,
        );

        let config = ScannerConfig::load_with_prefix(Some(&path), "DESTINYTEST_FILE").unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
        assert!(config.palm.advanced);
        // untouched sections keep defaults
        assert!(config.server.cors_permissive);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[logging]\nlevel = \"warn\"\n");

        std::env::set_var("DESTINYTEST_ENV__LOGGING__LEVEL", "debug");
        let config = ScannerConfig::load_with_prefix(Some(&path), "DESTINYTEST_ENV").unwrap();
        std::env::remove_var("DESTINYTEST_ENV__LOGGING__LEVEL");

        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = ScannerConfig::load_with_prefix(Some(&path), "DESTINYTEST_MISSING").unwrap_err();
        assert!(matches!(err, ScannerError::Config(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[server]\nbind_addr = \"not an address\"\n");
        assert!(ScannerConfig::load_with_prefix(Some(&path), "DESTINYTEST_BAD").is_err());

        let mut config = ScannerConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }
}
