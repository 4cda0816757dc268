//! `validate` command
//!
//! Loads each manifest through the full pipeline and reports the outcome.

use std::path::Path;

use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::loader::ConfigLoader;
use crate::error::{ConfigError, FwdspecError};

/// Validation outcome for one file.
#[derive(Debug, Serialize)]
struct FileReport {
    path: String,
    valid: bool,
    forwards: usize,
    warnings: Vec<String>,
    errors: Vec<String>,
}

/// Counts across all files.
#[derive(Debug, Serialize)]
struct Summary {
    total: usize,
    valid: usize,
    invalid: usize,
}

#[derive(Debug, Serialize)]
struct Report {
    files: Vec<FileReport>,
    summary: Summary,
}

/// Validate manifest files.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] or [`ConfigError::ReadError`] as soon
/// as a file cannot be read, or [`ConfigError::ValidationFailed`] if any file
/// is invalid.
pub fn run(args: &ValidateArgs) -> Result<(), FwdspecError> {
    let loader = ConfigLoader::with_defaults();
    let mut files = Vec::with_capacity(args.files.len());

    for path in &args.files {
        tracing::info!(file = %path.display(), "validating manifest");
        files.push(validate_file(&loader, path, args.strict)?);
    }

    let invalid = files.iter().filter(|f| !f.valid).count();
    let report = Report {
        summary: Summary {
            total: files.len(),
            valid: files.len() - invalid,
            invalid,
        },
        files,
    };

    match args.format {
        OutputFormat::Human => print_human(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if invalid > 0 {
        return Err(ConfigError::ValidationFailed { count: invalid }.into());
    }
    Ok(())
}

/// Loads one manifest into a report. Only I/O failures are returned as
/// errors; everything else marks the file invalid.
fn validate_file(
    loader: &ConfigLoader,
    path: &Path,
    strict: bool,
) -> Result<FileReport, ConfigError> {
    let shown = path.display().to_string();

    match loader.load(path) {
        Ok(result) => {
            let warnings: Vec<String> = result
                .warnings
                .iter()
                .map(|w| match &w.location {
                    Some(location) => format!("{} at {location}", w.message),
                    None => w.message.clone(),
                })
                .collect();

            for warning in &result.warnings {
                tracing::warn!(
                    file = %shown,
                    location = warning.location.as_deref().unwrap_or("<unknown>"),
                    "{}",
                    warning.message
                );
            }

            let (warnings, errors) = if strict {
                (Vec::new(), warnings)
            } else {
                (warnings, Vec::new())
            };

            Ok(FileReport {
                path: shown,
                valid: errors.is_empty(),
                forwards: result.manifest.forward.len(),
                warnings,
                errors,
            })
        }
        Err(err @ (ConfigError::MissingFile { .. } | ConfigError::ReadError { .. })) => Err(err),
        Err(err) => {
            tracing::debug!(file = %shown, error = %err, "manifest rejected");
            let errors = match err {
                ConfigError::ValidationError { errors, .. } => {
                    errors.iter().map(ToString::to_string).collect()
                }
                other => vec![other.to_string()],
            };
            Ok(FileReport {
                path: shown,
                valid: false,
                forwards: 0,
                warnings: Vec::new(),
                errors,
            })
        }
    }
}

fn print_human(report: &Report) {
    for file in &report.files {
        if file.valid {
            println!("ok: {} ({} forward(s))", file.path, file.forwards);
        } else {
            eprintln!("invalid: {}", file.path);
            for error in &file.errors {
                eprintln!("  {error}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_manifest(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_file_ok() {
        let file = write_manifest("forward:\n  - 8080:svc:5214\n");
        let report = validate_file(&ConfigLoader::with_defaults(), file.path(), false).unwrap();
        assert!(report.valid);
        assert_eq!(report.forwards, 1);
    }

    #[test]
    fn test_validate_file_strict_promotes_warnings() {
        let file = write_manifest("forward:\n  - 443:ingress:8443\n");
        let loader = ConfigLoader::with_defaults();

        let lenient = validate_file(&loader, file.path(), false).unwrap();
        assert!(lenient.valid);
        assert_eq!(lenient.warnings.len(), 1);

        let strict = validate_file(&loader, file.path(), true).unwrap();
        assert!(!strict.valid);
        assert_eq!(strict.errors.len(), 1);
        assert!(strict.errors[0].contains("forward[0].localPort"));
    }

    #[test]
    fn test_validate_file_lists_each_issue() {
        let file = write_manifest("forward:\n  - 8080:a:1\n  - 8080:b:1\n  - 8080:c:1\n");
        let report = validate_file(&ConfigLoader::with_defaults(), file.path(), false).unwrap();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_run_fails_on_invalid_file() {
        let file = write_manifest("forward:\n  - 8080:8081:svc\n");
        let args = ValidateArgs {
            files: vec![file.path().to_path_buf()],
            format: OutputFormat::Json,
            strict: false,
        };
        let err = run(&args).unwrap_err();
        assert!(matches!(
            err,
            FwdspecError::Config(ConfigError::ValidationFailed { count: 1 })
        ));
    }

    #[test]
    fn test_run_missing_file() {
        let args = ValidateArgs {
            files: vec!["/nonexistent/fwdspec/forwards.yaml".into()],
            format: OutputFormat::Human,
            strict: false,
        };
        let err = run(&args).unwrap_err();
        assert!(matches!(err, FwdspecError::Config(ConfigError::MissingFile { .. })));
        assert_eq!(err.exit_code(), crate::error::ExitCode::IO_ERROR);
    }

    #[test]
    fn test_validate_file_unreadable_is_error() {
        let file = write_manifest("");
        std::fs::write(file.path(), [0x66, 0xff, 0xfe]).unwrap();
        let err = validate_file(&ConfigLoader::with_defaults(), file.path(), false).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_validate_file_reports_warning_location() {
        let file = write_manifest("forward:\n  - 80:web:8080\n");
        let report = validate_file(&ConfigLoader::with_defaults(), file.path(), false).unwrap();
        assert!(report.valid);
        assert_eq!(report.path, file.path().display().to_string());
        assert!(report.warnings[0].ends_with("at forward[0].localPort"));
    }
}
