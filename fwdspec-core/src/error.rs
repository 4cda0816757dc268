//! Core error types for `fwdspec`
//!
//! Forward parsing errors plus the manifest configuration and validation
//! error types shared across the workspace.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Forward Errors
// ============================================================================

/// Errors produced when a forward specification cannot be parsed or built.
///
/// Every variant carries the raw input so the message can be shown to the
/// user verbatim. All variants are user input errors; none are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForwardError {
    /// Input does not split into exactly three `:`-delimited segments.
    #[error(
        "invalid forward '{input}': expected <local>:<service>:<remote>, found {found} part(s)"
    )]
    WrongPartCount {
        /// The raw forward text
        input: String,
        /// Number of segments found
        found: usize,
    },

    /// One or more segments is empty.
    #[error("invalid forward '{input}': empty field")]
    EmptyField {
        /// The raw forward text
        input: String,
    },

    /// The first segment is not a port number.
    #[error("invalid forward '{input}': local port '{value}' is not a port number (1-65535)")]
    InvalidLocalPort {
        /// The raw forward text
        input: String,
        /// The offending segment
        value: String,
    },

    /// The second segment is numeric, so it cannot be a service name.
    #[error("invalid forward '{input}': service name '{value}' must not be numeric")]
    ServiceNameMustNotBeNumeric {
        /// The raw forward text
        input: String,
        /// The offending segment
        value: String,
    },

    /// The third segment is not a port number.
    #[error("invalid forward '{input}': remote port '{value}' is not a port number (1-65535)")]
    InvalidRemotePort {
        /// The raw forward text
        input: String,
        /// The offending segment
        value: String,
    },
}

/// Discriminant of a [`ForwardError`], for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForwardErrorKind {
    /// See [`ForwardError::WrongPartCount`]
    WrongPartCount,
    /// See [`ForwardError::EmptyField`]
    EmptyField,
    /// See [`ForwardError::InvalidLocalPort`]
    InvalidLocalPort,
    /// See [`ForwardError::ServiceNameMustNotBeNumeric`]
    ServiceNameMustNotBeNumeric,
    /// See [`ForwardError::InvalidRemotePort`]
    InvalidRemotePort,
}

impl ForwardError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ForwardErrorKind {
        match self {
            Self::WrongPartCount { .. } => ForwardErrorKind::WrongPartCount,
            Self::EmptyField { .. } => ForwardErrorKind::EmptyField,
            Self::InvalidLocalPort { .. } => ForwardErrorKind::InvalidLocalPort,
            Self::ServiceNameMustNotBeNumeric { .. } => {
                ForwardErrorKind::ServiceNameMustNotBeNumeric
            }
            Self::InvalidRemotePort { .. } => ForwardErrorKind::InvalidRemotePort,
        }
    }

    /// Returns the raw text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::WrongPartCount { input, .. }
            | Self::EmptyField { input }
            | Self::InvalidLocalPort { input, .. }
            | Self::ServiceNameMustNotBeNumeric { input, .. }
            | Self::InvalidRemotePort { input, .. } => input,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Manifest loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing or deserialization failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the manifest file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Manifest validation failed
    #[error("validation failed for {path}: {}", format_issues(errors))]
    ValidationError {
        /// Path to the manifest file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced manifest file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Manifest file exists but could not be read
    #[error("cannot read {path}: {source}")]
    ReadError {
        /// Path to the manifest file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },

    /// One or more manifest files failed validation.
    #[error("{count} file(s) failed validation")]
    ValidationFailed {
        /// Number of files that failed validation.
        count: usize,
    },
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during manifest validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "forward[2].localPort")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - validation failure that prevents the manifest from being used
    Error,
    /// Warning - potential issue that does not prevent loading
    Warning,
}
