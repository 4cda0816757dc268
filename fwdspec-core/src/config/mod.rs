//! Manifest schema types
//!
//! The document shape that hosts global forwards. Loading and semantic
//! validation live in the `fwdspec` crate.

pub mod schema;

pub use schema::*;
