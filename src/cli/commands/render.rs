//! `render` command
//!
//! Builds a forward through the checked constructor and prints it.

use indexmap::IndexMap;

use crate::cli::args::{OutputFormat, RenderArgs};
use crate::error::FwdspecError;
use fwdspec_core::{GlobalForward, render};

/// Render a forward from its parts.
///
/// # Errors
///
/// Returns a forward error if the parts break the forward invariants, or a
/// usage error if a label is not `key=value`.
pub fn run(args: &RenderArgs) -> Result<(), FwdspecError> {
    let labels = parse_labels(&args.labels)?;
    let fwd = GlobalForward::new(args.local, &args.service, args.remote)?.with_labels(labels);

    match args.format {
        OutputFormat::Human => {
            if !fwd.labels().is_empty() {
                tracing::warn!(
                    labels = fwd.labels().len(),
                    "labels are not part of the scalar form; use --format json to keep them"
                );
            }
            println!("{}", render(&fwd));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&fwd.structural())?);
        }
    }

    Ok(())
}

/// Parses `key=value` label arguments, keeping their order.
fn parse_labels(raw: &[String]) -> Result<IndexMap<String, String>, FwdspecError> {
    raw.iter()
        .map(|label| {
            label
                .split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| FwdspecError::Usage(format!("label '{label}' is not KEY=VALUE")))
        })
        .collect()
}
