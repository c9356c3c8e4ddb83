// 📝 Logging - tracing subscriber setup shared by the CLI and the server
// RUST_LOG wins over logging.level when set.

use crate::config::LoggingConfig;
use crate::error::{Result, ScannerError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the filter: RUST_LOG first, then the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level.to_lowercase()))
        .map_err(|e| ScannerError::Config(format!("logging.level '{}': {}", config.level, e)))
}

/// Human-readable logs on stderr so stdout stays clean for JSON output.
pub fn init(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(env_filter(config)?)
        .try_init()
        .map_err(|e| ScannerError::Config(format!("logging already initialized: {}", e)))
}

/// Filter only, no output. For the full-screen terminal view, where any
/// stderr write would tear the frame.
pub fn init_quiet(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .try_init()
        .map_err(|e| ScannerError::Config(format!("logging already initialized: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_level() {
        let config = LoggingConfig {
            level: "DEBUG".to_string(),
        };
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let config = LoggingConfig::default();
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
