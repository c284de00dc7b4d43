//! Schedule outcome (solution) model.
//!
//! An outcome is the read-out of one solve: which participants landed in
//! which slots, and who could not be placed. Slots with no assignments
//! are omitted; the remaining slots keep the catalog's order. Together
//! the assigned and unassigned sets partition the input participants.

use serde::{Deserialize, Serialize};

use super::{Participant, Slot};

/// Participants placed into one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// The slot that was filled.
    pub slot: Slot,
    /// Participants occupying it. Never more than the slot's capacity.
    pub participants: Vec<Participant>,
}

/// A complete assignment outcome.
///
/// Immutable once produced; a new solve builds a new outcome from
/// scratch rather than mutating an old one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Filled slots in catalog order. Empty slots are not listed.
    pub assignments: Vec<SlotAssignment>,
    /// Participants that received no slot.
    pub unassigned: Vec<Participant>,
}

impl ScheduleOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filled slot.
    pub fn add_assignment(&mut self, slot: Slot, participants: Vec<Participant>) {
        self.assignments.push(SlotAssignment { slot, participants });
    }

    /// Number of participants that received a slot.
    pub fn total_assigned(&self) -> usize {
        self.assignments.iter().map(|a| a.participants.len()).sum()
    }

    /// Number of participants that received no slot.
    pub fn total_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// Whether nothing was assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Participants placed in the slot with the given label.
    pub fn participants_in(&self, label: &str) -> Option<&[Participant]> {
        self.assignments
            .iter()
            .find(|a| a.slot.label == label)
            .map(|a| a.participants.as_slice())
    }

    /// The slot a participant landed in, if any.
    pub fn slot_of(&self, participant: &Participant) -> Option<&Slot> {
        self.assignments
            .iter()
            .find(|a| a.participants.contains(participant))
            .map(|a| &a.slot)
    }

    /// All assigned participants, in slot order.
    pub fn assigned_participants(&self) -> Vec<&Participant> {
        self.assignments
            .iter()
            .flat_map(|a| a.participants.iter())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcome() -> ScheduleOutcome {
        let mut o = ScheduleOutcome::new();
        o.add_assignment(
            Slot::new("13:00-13:30"),
            vec![Participant::new("kim"), Participant::new("lee")],
        );
        o.add_assignment(Slot::new("13:40-14:10"), vec![Participant::new("park")]);
        o.unassigned.push(Participant::new("choi"));
        o
    }

    #[test]
    fn test_outcome_totals() {
        let o = sample_outcome();
        assert_eq!(o.total_assigned(), 3);
        assert_eq!(o.total_unassigned(), 1);
        assert!(!o.is_empty());
    }

    #[test]
    fn test_outcome_lookup_by_label() {
        let o = sample_outcome();
        let first = o.participants_in("13:00-13:30").unwrap();
        assert_eq!(first.len(), 2);
        assert!(o.participants_in("23:00-23:30").is_none());
    }

    #[test]
    fn test_outcome_slot_of_participant() {
        let o = sample_outcome();
        let slot = o.slot_of(&Participant::new("park")).unwrap();
        assert_eq!(slot.label, "13:40-14:10");
        assert!(o.slot_of(&Participant::new("choi")).is_none());
    }

    #[test]
    fn test_empty_outcome() {
        let o = ScheduleOutcome::new();
        assert_eq!(o.total_assigned(), 0);
        assert_eq!(o.total_unassigned(), 0);
        assert!(o.is_empty());
    }
}
