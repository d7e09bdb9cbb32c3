//! Source label type

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Name of an input feed eligible for routing (e.g. "left_1", "spot")
///
/// Labels are opaque: only identity and list position matter. Backed by
/// `Arc<str>` so tables can be cloned without copying strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceLabel(Arc<str>);

impl SourceLabel {
    /// Create a label from a string
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self(label.into())
    }

    /// The label as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SourceLabel {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for SourceLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SourceLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SourceLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
