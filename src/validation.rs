//! Input validation for assignment requests.
//!
//! Checks structural integrity of the participant and slot lists before
//! a solve starts. Detects:
//! - Blank participant identifiers and slot labels
//! - Duplicate slot labels (the outcome is keyed by label)
//! - Negative slot capacities
//! - A default capacity below one
//!
//! All problems are collected and reported together, not first-failure.
//! Duplicate participants are deliberately *not* an error: the engine
//! treats repeated identifiers as independent assignable units.

use std::collections::HashSet;

use crate::models::{Participant, Slot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A participant or slot identifier is empty after trimming.
    EmptyIdentifier,
    /// Two slots share the same label.
    DuplicateSlot,
    /// A slot declares a capacity below zero.
    NegativeCapacity,
    /// The configured default capacity is below one.
    DefaultCapacityOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of an assignment request.
///
/// Checks:
/// 1. The default capacity is at least 1
/// 2. No participant identifier is blank
/// 3. No slot label is blank
/// 4. No two slots share a label
/// 5. No slot declares a negative capacity (zero is legal)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(
    participants: &[Participant],
    slots: &[Slot],
    default_capacity: i32,
) -> ValidationResult {
    let mut errors = Vec::new();

    if default_capacity < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::DefaultCapacityOutOfRange,
            format!("Default capacity must be at least 1, got {default_capacity}"),
        ));
    }

    for (i, p) in participants.iter().enumerate() {
        if p.is_blank() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyIdentifier,
                format!("Participant at index {i} has a blank identifier"),
            ));
        }
    }

    let mut labels = HashSet::new();
    for (j, slot) in slots.iter().enumerate() {
        if slot.is_blank() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyIdentifier,
                format!("Slot at index {j} has a blank label"),
            ));
        } else if !labels.insert(slot.label.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlot,
                format!("Duplicate slot label: {}", slot.label),
            ));
        }

        if let Some(capacity) = slot.capacity {
            if capacity < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeCapacity,
                    format!("Slot '{}' has negative capacity {capacity}", slot.label),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_participants() -> Vec<Participant> {
        vec![
            Participant::new("kim"),
            Participant::new("lee"),
            Participant::new("park"),
        ]
    }

    fn sample_slots() -> Vec<Slot> {
        vec![
            Slot::new("13:00-13:30"),
            Slot::new("13:40-14:10").with_capacity(2),
        ]
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&sample_participants(), &sample_slots(), 1).is_ok());
    }

    #[test]
    fn test_blank_participant() {
        let participants = vec![Participant::new("kim"), Participant::new("   ")];
        let errors = validate_request(&participants, &sample_slots(), 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyIdentifier));
    }

    #[test]
    fn test_blank_slot_label() {
        let slots = vec![Slot::new("")];
        let errors = validate_request(&sample_participants(), &slots, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyIdentifier));
    }

    #[test]
    fn test_duplicate_slot_label() {
        let slots = vec![Slot::new("13:00-13:30"), Slot::new("13:00-13:30")];
        let errors = validate_request(&sample_participants(), &slots, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSlot));
    }

    #[test]
    fn test_negative_capacity() {
        let slots = vec![Slot::new("13:00-13:30").with_capacity(-1)];
        let errors = validate_request(&sample_participants(), &slots, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeCapacity));
    }

    #[test]
    fn test_zero_capacity_is_legal() {
        let slots = vec![Slot::new("13:00-13:30").with_capacity(0)];
        assert!(validate_request(&sample_participants(), &slots, 1).is_ok());
    }

    #[test]
    fn test_default_capacity_out_of_range() {
        let errors = validate_request(&sample_participants(), &sample_slots(), 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DefaultCapacityOutOfRange));
    }

    #[test]
    fn test_duplicate_participants_allowed() {
        let participants = vec![Participant::new("kim"), Participant::new("kim")];
        assert!(validate_request(&participants, &sample_slots(), 1).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let participants = vec![Participant::new("")];
        let slots = vec![
            Slot::new("a").with_capacity(-2),
            Slot::new("a"),
        ];
        let errors = validate_request(&participants, &slots, 1).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
