//! `fwdspec` - parse, render and validate global forward specifications
//!
//! This library backs the `fwdspec` CLI: manifest loading and validation,
//! logging setup, and command handlers. The codec itself lives in
//! `fwdspec-core`.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;

pub use fwdspec_core::{GlobalForward, forward};
