//! Slot model.
//!
//! A slot is an opaque, comparable label paired with an integer capacity.
//! Labels are formatted time ranges in the reference usage ("13:00-13:30"),
//! but the engine treats them as identifiers only. The position of a slot
//! in the caller's list defines its preference order: earlier means more
//! preferred under the earliest-first objective.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bounded-capacity time unit participants can be assigned into.
///
/// Capacity is explicit (`with_capacity`) or deferred to the engine's
/// configured default. Zero capacity is legal and makes the slot
/// unusable; negative capacity is rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Slot label, unique within one request.
    pub label: String,
    /// Explicit capacity, or `None` to use the configured default.
    pub capacity: Option<i32>,
}

impl Slot {
    /// Creates a slot that uses the configured default capacity.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            capacity: None,
        }
    }

    /// Sets an explicit capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Capacity actually applied during a solve.
    #[inline]
    pub fn effective_capacity(&self, default_capacity: i32) -> i32 {
        self.capacity.unwrap_or(default_capacity)
    }

    /// Whether the label is blank after trimming.
    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_default_capacity() {
        let s = Slot::new("13:00-13:30");
        assert_eq!(s.capacity, None);
        assert_eq!(s.effective_capacity(1), 1);
        assert_eq!(s.effective_capacity(3), 3);
    }

    #[test]
    fn test_slot_explicit_capacity() {
        let s = Slot::new("13:00-13:30").with_capacity(2);
        assert_eq!(s.effective_capacity(1), 2);

        let unusable = Slot::new("14:00-14:30").with_capacity(0);
        assert_eq!(unusable.effective_capacity(5), 0);
    }

    #[test]
    fn test_slot_display_is_label() {
        let s = Slot::new("13:00-13:30").with_capacity(2);
        assert_eq!(s.to_string(), "13:00-13:30");
    }
}
