// ⚠️ Error Types - one enum for every boundary failure
// Lookup-table gaps are NOT errors: they resolve to documented fallbacks.

use thiserror::Error;

/// Library result type
pub type Result<T> = std::result::Result<T, ScannerError>;

#[derive(Debug, Error)]
pub enum ScannerError {
    /// Date fields that do not form a real calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Birth time text that is not HH:MM
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// The digit reducer only accepts positive integers
    #[error("Digit reduction requires a positive integer, got {0}")]
    NonPositive(u64),

    /// A number outside {1..9, 11, 22, 33}
    #[error("{0} is not a reduced numerology number")]
    InvalidNumber(u64),

    /// Text where a positive integer was expected
    #[error("'{0}' is not a positive integer")]
    NotANumber(String),

    #[error("Unknown palm analysis mode: {0}")]
    UnknownMode(String),

    #[error("Palm image is empty")]
    EmptyImage,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Insight provider error: {0}")]
    Provider(String),
}

impl ScannerError {
    /// True when the caller sent bad input (as opposed to a server-side failure)
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ScannerError::Config(_) | ScannerError::Provider(_))
    }
}

impl From<config::ConfigError> for ScannerError {
    fn from(err: config::ConfigError) -> Self {
        ScannerError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        assert!(ScannerError::InvalidDate("1990-02-30".to_string()).is_input_error());
        assert!(ScannerError::NonPositive(0).is_input_error());
        assert!(ScannerError::EmptyImage.is_input_error());
        assert!(!ScannerError::Config("bad".to_string()).is_input_error());
        assert!(!ScannerError::Provider("down".to_string()).is_input_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScannerError::InvalidNumber(12).to_string(),
            "12 is not a reduced numerology number"
        );
        assert_eq!(
            ScannerError::NonPositive(0).to_string(),
            "Digit reduction requires a positive integer, got 0"
        );
    }
}
