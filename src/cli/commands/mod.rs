//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod normalize;
pub mod parse;
pub mod render;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::FwdspecError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), FwdspecError> {
    match cli.command {
        Commands::Parse(args) => parse::run(&args),
        Commands::Render(args) => render::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Normalize(args) => normalize::run(&args),
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
