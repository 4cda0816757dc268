//! `normalize` command
//!
//! Loads a manifest and prints it back in canonical form: unlabelled
//! forwards as scalars, labelled ones as mappings.

use crate::cli::args::NormalizeArgs;
use crate::config::loader::ConfigLoader;
use crate::error::FwdspecError;

/// Print a manifest in canonical form.
///
/// # Errors
///
/// Returns a config error if the manifest does not load, or a YAML error if
/// it cannot be re-serialized.
pub fn run(args: &NormalizeArgs) -> Result<(), FwdspecError> {
    let result = ConfigLoader::with_defaults().load(&args.file)?;

    for warning in &result.warnings {
        tracing::warn!(
            location = warning.location.as_deref().unwrap_or("<unknown>"),
            "{}",
            warning.message
        );
    }

    print!("{}", serde_yaml::to_string(result.manifest.as_ref())?);
    Ok(())
}
