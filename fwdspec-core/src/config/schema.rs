//! Manifest schema types
//!
//! A manifest is a YAML document listing global forwards:
//!
//! ```yaml
//! name: dev-env
//! forward:
//!   - 8080:api:80
//!   - localPort: 5432
//!     serviceName: postgres
//!     remotePort: 5432
//!     labels:
//!       tier: db
//! ```

use serde::{Deserialize, Serialize, Serializer};

use crate::forward::GlobalForward;
use crate::forward::document::serialize_preserving_labels;

// ============================================================================
// Top-Level Manifest
// ============================================================================

/// Root of a forward manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ForwardManifest {
    /// Optional manifest name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Global forwards, in declaration order
    #[serde(default, serialize_with = "serialize_forwards")]
    pub forward: Vec<GlobalForward>,
}

impl ForwardManifest {
    /// Returns the manifest name, or `"<unnamed>"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// Returns `true` if any forward carries labels.
    #[must_use]
    pub fn has_labels(&self) -> bool {
        self.forward.iter().any(|fwd| !fwd.labels().is_empty())
    }
}

/// Emits unlabelled forwards as scalars and labelled ones as mappings.
fn serialize_forwards<S: Serializer>(
    forwards: &[GlobalForward],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(forwards.iter().map(ManifestEntry))
}

struct ManifestEntry<'a>(&'a GlobalForward);

impl Serialize for ManifestEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_preserving_labels(self.0, serializer)
    }
}
