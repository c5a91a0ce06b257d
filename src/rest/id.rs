//! Resource identifiers.
//!
//! The GoCardless API identifies most resources with opaque strings
//! (`"0A1B2C3D4E"`) but some payloads carry numeric ids. [`ResourceId`]
//! accepts both and displays them the way they appeared on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::ResourceError;

/// The identifier of a resource, as found under its `id` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// A numeric identifier.
    Number(u64),
    /// A string identifier. Never empty.
    Text(String),
}

impl ResourceId {
    /// Reads an identifier from a JSON attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for `null` or empty strings and
    /// [`ResourceError::InvalidId`] for values that are neither non-negative
    /// integers nor strings.
    pub fn from_value(resource: &'static str, value: &Value) -> Result<Self, ResourceError> {
        match value {
            Value::String(s) if !s.is_empty() => Ok(Self::Text(s.clone())),
            Value::String(_) | Value::Null => Err(ResourceError::MissingId { resource }),
            Value::Number(n) => n.as_u64().map(Self::Number).ok_or_else(|| {
                ResourceError::InvalidId {
                    resource,
                    value: n.to_string(),
                }
            }),
            other => Err(ResourceError::InvalidId {
                resource,
                value: other.to_string(),
            }),
        }
    }

    /// Returns the string form of a text identifier.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl PartialEq<u64> for ResourceId {
    fn eq(&self, other: &u64) -> bool {
        matches!(self, Self::Number(n) if n == other)
    }
}

impl PartialEq<&str> for ResourceId {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Text(s) if s == other)
    }
}

impl PartialEq<str> for ResourceId {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Self::Text(s) if s == other)
    }
}
