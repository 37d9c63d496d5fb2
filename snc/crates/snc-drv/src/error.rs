//! Error types for the snc driver.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a driver run.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Missing, unreadable or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading an input or writing an output failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// The file involved
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Token dump could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lexing finished but produced error tokens.
    #[error("lexing failed with {errors} error(s)")]
    LexFailed {
        /// Number of error tokens across all inputs
        errors: usize,
    },
}

impl DriverError {
    /// Wraps an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DriverError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DriverError::io("src/main.sn", io_err);
        assert_eq!(err.to_string(), "src/main.sn: file not found");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_lex_failed_display() {
        let err = DriverError::LexFailed { errors: 3 };
        assert_eq!(err.to_string(), "lexing failed with 3 error(s)");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DriverError = json_err.into();
        assert!(matches!(err, DriverError::Json(_)));
    }
}
