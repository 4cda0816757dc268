//! Configuration module
//!
//! Loading and validation of forward manifests. The schema types are
//! defined in `fwdspec-core` and re-exported here.

pub mod loader;
pub mod validation;

pub use fwdspec_core::config::schema;

pub use loader::{ConfigLimits, ConfigLoader, LoadResult, LoadWarning};
pub use schema::*;
pub use validation::{ValidationResult, Validator};
