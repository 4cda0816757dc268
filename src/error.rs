//! Error types for `fwdspec`
//!
//! Top-level error aggregation and exit code mapping for the CLI. Domain
//! errors live in `fwdspec-core` and are re-exported here.

use thiserror::Error;

pub use fwdspec_core::error::{
    ConfigError, ForwardError, ForwardErrorKind, Severity, ValidationIssue,
};

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `fwdspec` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid forward, invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `fwdspec` operations.
#[derive(Debug, Error)]
pub enum FwdspecError {
    /// Manifest loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Forward specification error
    #[error(transparent)]
    Forward(#[from] ForwardError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid command-line usage not caught by argument parsing
    #[error("usage error: {0}")]
    Usage(String),
}

impl FwdspecError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::MissingFile { .. } | ConfigError::ReadError { .. })
            | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Config(_) | Self::Forward(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Json(_) => ExitCode::ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_forward() {
        let err: FwdspecError = fwdspec_core::parse("8080:9090").unwrap_err().into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
        assert!(err.to_string().starts_with("invalid forward '8080:9090'"));
    }

    #[test]
    fn test_exit_code_config() {
        let err = FwdspecError::Config(ConfigError::ValidationFailed { count: 2 });
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
        assert_eq!(err.to_string(), "2 file(s) failed validation");
    }

    #[test]
    fn test_exit_code_missing_file() {
        let err = FwdspecError::Config(ConfigError::MissingFile {
            path: PathBuf::from("nope.yaml"),
        });
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_exit_code_unreadable_file() {
        let err = FwdspecError::Config(ConfigError::ReadError {
            path: PathBuf::from("forwards.yaml"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
        assert!(err.to_string().starts_with("cannot read forwards.yaml"));
    }

    #[test]
    fn test_exit_code_io() {
        let err = FwdspecError::Io(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_exit_code_usage() {
        let err = FwdspecError::Usage("bad label".to_string());
        assert_eq!(err.exit_code(), ExitCode::USAGE_ERROR);
    }
}
