//! Shared integration-test harness for running the `fwdspec` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for invoking the built `fwdspec` binary.
pub struct FwdspecProcess;

impl FwdspecProcess {
    /// Runs `fwdspec` with the given arguments and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_fwdspec"))
            .args(args)
            .env_remove("FWDSPEC_LOG_LEVEL")
            .env_remove("FWDSPEC_LOG_FORMAT")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to spawn fwdspec")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Returns the path to a test fixture as a string argument.
    #[must_use]
    pub fn fixture_arg(name: &str) -> String {
        Self::fixture_path(name).display().to_string()
    }
}
