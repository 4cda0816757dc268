//! Document hooks for [`GlobalForward`].
//!
//! - Serializing always produces the scalar form; labels are dropped.
//! - Deserializing accepts either the scalar form or the structural form:
//!
//! ```yaml
//! forward:
//!   - 8080:svc:5214
//!   - localPort: 27017
//!     serviceName: mongodb
//!     remotePort: 27017
//!     labels:
//!       tier: db
//! ```
//!
//! Hosts that must keep labels serialize through [`StructuralForward`].

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{GlobalForward, SEPARATOR, parse};

impl Serialize for GlobalForward {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GlobalForward {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ForwardVisitor)
    }
}

struct ForwardVisitor;

impl<'de> Visitor<'de> for ForwardVisitor {
    type Value = GlobalForward;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a forward as '<local>:<service>:<remote>' or a mapping")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse(v).map_err(E::custom)
    }

    // A bare number such as `8080` is a one-segment forward.
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let fields = StructuralFields::deserialize(de::value::MapAccessDeserializer::new(map))?;
        let text = format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            fields.local_port, fields.service_name, fields.remote_port
        );
        parse(&text)
            .map(|fwd| fwd.with_labels(fields.labels))
            .map_err(de::Error::custom)
    }
}

/// Mapping form as read from a document. Ports are read wider than `u16`
/// so that range failures come from the codec, not from serde.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct StructuralFields {
    #[serde(alias = "local_port")]
    local_port: u64,

    #[serde(alias = "service_name", alias = "name")]
    service_name: String,

    #[serde(alias = "remote_port")]
    remote_port: u64,

    #[serde(default)]
    labels: IndexMap<String, String>,
}

/// Borrowed structural (mapping) view of a [`GlobalForward`].
///
/// Serializes as `{localPort, serviceName, remotePort, labels}` with
/// `labels` omitted when empty.
#[derive(Debug, Clone, Copy)]
pub struct StructuralForward<'a> {
    forward: &'a GlobalForward,
}

impl<'a> StructuralForward<'a> {
    /// Wraps a forward.
    #[must_use]
    pub const fn new(forward: &'a GlobalForward) -> Self {
        Self { forward }
    }

    /// The wrapped forward.
    #[must_use]
    pub const fn forward(&self) -> &'a GlobalForward {
        self.forward
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StructuralRef<'a> {
    local_port: u16,
    service_name: &'a str,
    remote_port: u16,
    #[serde(skip_serializing_if = "no_labels")]
    labels: &'a IndexMap<String, String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_labels(labels: &&IndexMap<String, String>) -> bool {
    labels.is_empty()
}

impl Serialize for StructuralForward<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StructuralRef {
            local_port: self.forward.local(),
            service_name: self.forward.service_name(),
            remote_port: self.forward.remote(),
            labels: self.forward.labels(),
        }
        .serialize(serializer)
    }
}

/// Serializes a forward as a scalar when it has no labels, otherwise as a
/// mapping, so that labels survive a document round trip.
///
/// # Errors
///
/// Returns the serializer's error.
pub fn serialize_preserving_labels<S: Serializer>(
    forward: &GlobalForward,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if forward.labels().is_empty() {
        forward.serialize(serializer)
    } else {
        forward.structural().serialize(serializer)
    }
}
