//! Observability module
//!
//! Logging infrastructure for `fwdspec` commands.

pub mod logging;

pub use logging::{LogFormat, LogSettings};
