//! Assignment domain models.
//!
//! Core data types for slot assignment problems and their solutions,
//! plus the employee roster types used by shift rotation. Identifiers
//! are opaque comparable strings throughout; the reference usage puts
//! names in participants and formatted time ranges in slot labels, but
//! nothing here depends on that.

mod employee;
mod outcome;
mod participant;
mod slot;

pub use employee::{EmployeeRecord, ShiftLetter, ShiftState};
pub use outcome::{ScheduleOutcome, SlotAssignment};
pub use participant::Participant;
pub use slot::Slot;
