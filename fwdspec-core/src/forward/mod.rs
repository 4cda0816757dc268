//! Global forward specifications
//!
//! A global forward routes a local port to a named remote service on a
//! remote port. Its compact scalar form is `<local>:<service>:<remote>`,
//! for example `8080:api:80`.
//!
//! [`parse`] and [`render`] are exact inverses for every accepted input.
//! Labels are metadata carried only by the structural (mapping) form and
//! never appear in the scalar form.

pub mod codec;
pub mod document;
mod parse;
mod proptest;

pub use codec::ScalarCodec;
pub use document::StructuralForward;
pub use parse::{SEPARATOR, parse};

use indexmap::IndexMap;

use crate::error::ForwardError;

/// A port forward from a local port to a named service's remote port.
///
/// Values can only be built through [`parse`] or [`GlobalForward::new`],
/// both of which enforce the same invariants: both ports are in 1-65535 and
/// the service name is non-empty, non-numeric and free of `:`. Rendering is
/// therefore infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalForward {
    local: u16,
    service_name: String,
    remote: u16,
    labels: IndexMap<String, String>,
}

impl GlobalForward {
    /// Builds a forward from its parts, enforcing the parse invariants.
    ///
    /// # Errors
    ///
    /// Returns the same error kind that [`parse`] would report for the
    /// rendered text, e.g. [`ForwardError::InvalidLocalPort`] for port `0`.
    pub fn new(
        local: u16,
        service_name: impl AsRef<str>,
        remote: u16,
    ) -> Result<Self, ForwardError> {
        parse(&format!(
            "{local}{SEPARATOR}{}{SEPARATOR}{remote}",
            service_name.as_ref()
        ))
    }

    /// Assembles a forward from segments that have already been checked.
    pub(crate) fn from_checked(local: u16, service_name: String, remote: u16) -> Self {
        Self {
            local,
            service_name,
            remote,
            labels: IndexMap::new(),
        }
    }

    /// Returns a copy of this forward carrying the given labels.
    #[must_use]
    pub fn with_labels(mut self, labels: IndexMap<String, String>) -> Self {
        self.labels = labels;
        self
    }

    /// Returns a copy of this forward with one more label.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Port on the local machine that receives traffic.
    #[must_use]
    pub const fn local(&self) -> u16 {
        self.local
    }

    /// Name of the remote service.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Port on the remote service that traffic is forwarded to.
    #[must_use]
    pub const fn remote(&self) -> u16 {
        self.remote
    }

    /// Metadata labels, in insertion order.
    #[must_use]
    pub const fn labels(&self) -> &IndexMap<String, String> {
        &self.labels
    }

    /// Borrows this forward as its structural (mapping) form.
    #[must_use]
    pub const fn structural(&self) -> StructuralForward<'_> {
        StructuralForward::new(self)
    }
}

/// Renders a forward in its canonical scalar form.
///
/// Labels are not included.
#[must_use]
pub fn render(forward: &GlobalForward) -> String {
    forward.to_string()
}

impl std::fmt::Display for GlobalForward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.local, self.service_name, self.remote
        )
    }
}

impl std::str::FromStr for GlobalForward {
    type Err = ForwardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
