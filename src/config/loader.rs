//! Manifest loader
//!
//! This module implements the manifest loading pipeline:
//! 1. Size check against `ConfigLimits::max_config_size`
//! 2. Read and strip a UTF-8 BOM
//! 3. YAML parsing
//! 4. Deserialization to `ForwardManifest` (forwards are parsed here)
//! 5. Semantic validation
//! 6. Freeze with `Arc`

use crate::config::schema::ForwardManifest;
use crate::config::validation::Validator;
use crate::error::ConfigError;

use serde_yaml::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ============================================================================
// Public API
// ============================================================================

/// Limits for manifest size to prevent resource exhaustion.
#[derive(Debug, Clone)]
pub struct ConfigLimits {
    /// Maximum number of forwards in one manifest.
    pub max_forwards: usize,

    /// Maximum manifest file size in bytes.
    pub max_config_size: usize,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_forwards: env_or("FWDSPEC_MAX_FORWARDS", 1024),
            max_config_size: env_or("FWDSPEC_MAX_CONFIG_SIZE", 1024 * 1024),
        }
    }
}

/// Result of loading a manifest.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated manifest.
    pub manifest: Arc<ForwardManifest>,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during manifest loading.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Location where the warning occurred.
    pub location: Option<String>,
}

/// Manifest loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    limits: ConfigLimits,
}

impl ConfigLoader {
    /// Creates a new loader with the given limits.
    #[must_use]
    pub const fn new(limits: ConfigLimits) -> Self {
        Self { limits }
    }

    /// Creates a new loader with default limits.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ConfigLimits::default())
    }

    /// Loads a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file is missing, cannot be read, or exceeds the size limit
    /// - YAML parsing fails or the document is empty
    /// - A forward entry is malformed
    /// - Validation fails
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let file_size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        self.check_size(file_size)?;

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_document(&raw, path)
    }

    /// Loads a manifest from an in-memory YAML document.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load`], minus file access errors.
    pub fn load_from_str(&self, yaml: &str) -> Result<LoadResult, ConfigError> {
        self.check_size(yaml.len())?;
        self.load_document(yaml, &PathBuf::from("<inline>"))
    }

    fn check_size(&self, size: usize) -> Result<(), ConfigError> {
        if size > self.limits.max_config_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{size} bytes"),
                expected: format!("at most {} bytes", self.limits.max_config_size),
            });
        }
        Ok(())
    }

    fn load_document(&self, raw: &str, path: &Path) -> Result<LoadResult, ConfigError> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        let root: Value = serde_yaml::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

        if root.is_null() {
            return Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: "manifest is empty".to_string(),
            });
        }

        let manifest: ForwardManifest =
            serde_yaml::from_value(root).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            forwards = manifest.forward.len(),
            "manifest parsed"
        );

        let result = Validator::new().validate(&manifest, &self.limits);

        if result.has_errors() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                errors: result.errors,
            });
        }

        let warnings = result
            .warnings
            .into_iter()
            .map(|issue| LoadWarning {
                message: issue.message,
                location: Some(issue.path),
            })
            .collect();

        Ok(LoadResult {
            manifest: Arc::new(manifest),
            warnings,
        })
    }
}

/// Reads a limit from the environment, falling back to `default`.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
