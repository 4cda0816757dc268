//! `fwdspec` Core — forward specification codec and manifest schema
//!
//! This crate provides the [`forward::GlobalForward`] value, its scalar
//! `<local>:<service>:<remote>` codec, the serde document hooks, and the
//! error types shared with the `fwdspec` CLI.

pub mod config;
pub mod error;
pub mod forward;

pub use error::{ForwardError, ForwardErrorKind};
pub use forward::{GlobalForward, parse, render};
