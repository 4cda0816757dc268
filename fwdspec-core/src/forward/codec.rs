//! Custom scalar codec capability.
//!
//! A [`ScalarCodec`] type knows how to decode itself from a scalar document
//! node and encode itself back to one. The [`scalar`] module plugs any such
//! type into serde as a string-valued field:
//!
//! ```text
//! #[derive(Serialize, Deserialize)]
//! struct Entry {
//!     #[serde(with = "fwdspec_core::forward::codec::scalar")]
//!     forward: GlobalForward,
//! }
//! ```

use std::fmt::Display;

use super::{GlobalForward, parse, render};
use crate::error::ForwardError;

/// A value with a compact textual form.
///
/// `encode` must be the exact inverse of `decode` for every text `decode`
/// accepts.
pub trait ScalarCodec: Sized {
    /// Error returned for text that does not decode.
    type Error: Display;

    /// Decodes a value from scalar text.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the text is not a valid encoding.
    fn decode(text: &str) -> Result<Self, Self::Error>;

    /// Encodes the value as scalar text.
    fn encode(&self) -> String;
}

impl ScalarCodec for GlobalForward {
    type Error = ForwardError;

    fn decode(text: &str) -> Result<Self, Self::Error> {
        parse(text)
    }

    fn encode(&self) -> String {
        render(self)
    }
}

/// Serde adapter for `#[serde(with = "...")]` on [`ScalarCodec`] fields.
pub mod scalar {
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::ScalarCodec;

    /// Serializes the value as its encoded string.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if writing the string fails.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: ScalarCodec,
        S: Serializer,
    {
        serializer.serialize_str(&value.encode())
    }

    /// Deserializes a string and decodes it.
    ///
    /// # Errors
    ///
    /// Returns a custom deserializer error carrying the decode message.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: ScalarCodec,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        T::decode(&text).map_err(de::Error::custom)
    }
}
