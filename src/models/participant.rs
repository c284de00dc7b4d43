//! Participant identity.
//!
//! Participants are opaque, comparable identifiers. The engine never
//! inspects their content; upstream parsing (see [`crate::roster`])
//! decides what a valid identifier looks like.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque participant identifier.
///
/// Wraps the caller-supplied string without interpreting it. Equality
/// and hashing are plain string semantics, so a `Participant` can key
/// maps and sets directly.
///
/// The engine does not deduplicate: if the caller passes the same
/// identifier twice, both entries are independent assignable units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Creates a participant from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is blank after trimming.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Participant {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Participant {
    fn from(s: String) -> Self {
        Self(s)
    }
}
