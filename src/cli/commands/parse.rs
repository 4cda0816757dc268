//! `parse` command
//!
//! Parses each specification and prints its canonical scalar form, or the
//! structural form as JSON.

use serde::Serialize;

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::error::FwdspecError;
use fwdspec_core::GlobalForward;
use fwdspec_core::forward::{ScalarCodec, StructuralForward};

/// One parsed specification in JSON output.
#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    spec: String,
    #[serde(flatten)]
    forward: StructuralForward<'a>,
}

/// Parse forward specifications.
///
/// # Errors
///
/// Returns the first [`crate::error::ForwardError`] encountered, with the
/// offending text, or a JSON error if output serialization fails.
pub fn run(args: &ParseArgs) -> Result<(), FwdspecError> {
    let forwards = args
        .specs
        .iter()
        .map(|spec| {
            GlobalForward::decode(spec).inspect_err(|e| {
                tracing::debug!(spec = %spec, kind = ?e.kind(), "rejected forward");
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(count = forwards.len(), "parsed forwards");

    match args.format {
        OutputFormat::Human => {
            for fwd in &forwards {
                println!("{}", fwd.encode());
            }
        }
        OutputFormat::Json => {
            let reports: Vec<ParseReport<'_>> = forwards
                .iter()
                .map(|fwd| ParseReport {
                    spec: fwd.encode(),
                    forward: fwd.structural(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}
