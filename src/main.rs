//! `fwdspec` — parse, render and validate global forward specifications

use clap::Parser;

use fwdspec::cli::args::Cli;
use fwdspec::cli::commands;
use fwdspec::error::ExitCode;
use fwdspec::observability::LogSettings;

fn main() {
    let cli = Cli::parse();

    LogSettings::from_cli(&cli).init();

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
