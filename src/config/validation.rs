//! Manifest validation
//!
//! Semantic checks that run after every forward has been parsed. Each
//! forward is already well-formed on its own; these checks look at the
//! manifest as a whole.
//!
//! Validation collects ALL issues (doesn't stop at first) to provide
//! comprehensive feedback to users.

use crate::config::loader::ConfigLimits;
use crate::config::schema::ForwardManifest;
use crate::error::{Severity, ValidationIssue};

use std::collections::HashMap;

/// Ports below this bound usually need elevated privileges to bind.
pub const PRIVILEGED_PORT_LIMIT: u16 = 1024;

// ============================================================================
// Public API
// ============================================================================

/// Result of manifest validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Manifest validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a manifest and returns the result.
    pub fn validate(&mut self, manifest: &ForwardManifest, limits: &ConfigLimits) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_limits(manifest, limits);
        self.validate_local_ports(manifest);
        self.validate_labels(manifest);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn validate_limits(&mut self, manifest: &ForwardManifest, limits: &ConfigLimits) {
        if manifest.forward.is_empty() {
            self.add_warning("forward", "Manifest declares no forwards");
        }

        if manifest.forward.len() > limits.max_forwards {
            self.add_error(
                "forward",
                &format!(
                    "Too many forwards: {} (max {})",
                    manifest.forward.len(),
                    limits.max_forwards
                ),
            );
        }
    }

    /// Two forwards cannot listen on the same local port.
    fn validate_local_ports(&mut self, manifest: &ForwardManifest) {
        let mut seen: HashMap<u16, usize> = HashMap::new();

        for (i, fwd) in manifest.forward.iter().enumerate() {
            let path = format!("forward[{i}].localPort");

            if let Some(first) = seen.get(&fwd.local()) {
                self.add_error(
                    &path,
                    &format!(
                        "Duplicate local port {} (already used by forward[{first}])",
                        fwd.local()
                    ),
                );
            } else {
                seen.insert(fwd.local(), i);
            }

            if fwd.local() < PRIVILEGED_PORT_LIMIT {
                self.add_warning(
                    &path,
                    &format!(
                        "Local port {} is privileged (< {PRIVILEGED_PORT_LIMIT})",
                        fwd.local()
                    ),
                );
            }
        }
    }

    fn validate_labels(&mut self, manifest: &ForwardManifest) {
        for (i, fwd) in manifest.forward.iter().enumerate() {
            if fwd.labels().keys().any(|k| k.trim().is_empty()) {
                self.add_warning(&format!("forward[{i}].labels"), "Label with an empty key");
            }
        }
    }

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
