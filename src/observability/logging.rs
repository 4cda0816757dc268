//! Logging setup for the `fwdspec` binary.
//!
//! Events go to stderr so stdout stays clean for command output. The level
//! comes from `-v`/`-q`, or from `FWDSPEC_LOG_LEVEL` when it is set.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, ColorChoice};

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_LEVEL_ENV: &str = "FWDSPEC_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Logging options taken from the global CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSettings {
    pub format: LogFormat,
    pub verbosity: u8,
    pub quiet: bool,
    pub color: ColorChoice,
}

impl LogSettings {
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.log_format,
            verbosity: cli.verbose,
            quiet: cli.quiet,
            color: cli.color,
        }
    }

    /// Filter directive used when `FWDSPEC_LOG_LEVEL` is unset.
    ///
    /// Other crates stay at `warn`; `-v` only raises `fwdspec` itself.
    /// `--quiet` wins over `-v`.
    #[must_use]
    pub fn directive(&self) -> String {
        if self.quiet {
            return "error".to_string();
        }
        match self.verbosity {
            0 => "warn".to_string(),
            1 => "warn,fwdspec=info".to_string(),
            2 => "warn,fwdspec=debug".to_string(),
            _ => "warn,fwdspec=trace".to_string(),
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new(self.directive()))
    }

    /// Installs the global subscriber. Later calls are no-ops.
    pub fn init(&self) {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_target(self.verbosity >= 2)
            .with_writer(std::io::stderr);

        let _ = match self.format {
            LogFormat::Human => builder
                .with_ansi(ansi_enabled(
                    self.color,
                    std::io::stderr().is_terminal(),
                    std::env::var_os("NO_COLOR").is_some(),
                ))
                .try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
    }
}

/// `auto` colors only an interactive stderr without `NO_COLOR`.
#[must_use]
pub const fn ansi_enabled(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn settings(args: &[&str]) -> LogSettings {
        let mut argv = vec!["fwdspec"];
        argv.extend_from_slice(args);
        argv.push("version");
        LogSettings::from_cli(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn log_format_from_str() {
        assert_eq!(LogFormat::from_str("json", true).unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("xml", true).is_err());
    }

    #[test]
    fn settings_from_flags() {
        let s = settings(&["-vv", "--log-format", "json", "--color", "never"]);
        assert_eq!(s.verbosity, 2);
        assert_eq!(s.format, LogFormat::Json);
        assert_eq!(s.color, ColorChoice::Never);
        assert!(!s.quiet);
    }

    #[test]
    fn directive_raises_only_own_crate() {
        assert_eq!(settings(&[]).directive(), "warn");
        assert_eq!(settings(&["-v"]).directive(), "warn,fwdspec=info");
        assert_eq!(settings(&["-vv"]).directive(), "warn,fwdspec=debug");
        assert_eq!(settings(&["-vvvvv"]).directive(), "warn,fwdspec=trace");
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(settings(&["-q", "-vvv"]).directive(), "error");
    }

    #[test]
    fn ansi_follows_color_choice() {
        assert!(ansi_enabled(ColorChoice::Auto, true, false));
        assert!(!ansi_enabled(ColorChoice::Auto, true, true));
        assert!(!ansi_enabled(ColorChoice::Auto, false, false));
        assert!(ansi_enabled(ColorChoice::Always, false, true));
        assert!(!ansi_enabled(ColorChoice::Never, true, false));
    }

    #[test]
    fn init_twice_is_harmless() {
        LogSettings::default().init();
        LogSettings {
            format: LogFormat::Json,
            verbosity: 3,
            ..LogSettings::default()
        }
        .init();
    }
}
