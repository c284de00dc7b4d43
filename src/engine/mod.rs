//! Slot assignment engine.
//!
//! Assigns participants to bounded-capacity slots, maximizing how many
//! participants are served and, under the default objective, biasing
//! assignment toward earlier slots when not everyone fits. Three stages
//! run once per call with no shared state across invocations:
//!
//! 1. **Model builder** ([`AssignmentModel`]): P×S binary decisions,
//!    a degree bound per participant, a capacity bound per slot.
//! 2. **Solver**: exact global optimum via `good_lp` — never a
//!    heuristic, because the product guarantee is "maximum number
//!    served, earliest-first".
//! 3. **Extractor**: pure read-out of decision values into a
//!    [`ScheduleOutcome`].
//!
//! [`solve`] is a pure function of its arguments; concurrent callers
//! each get an independent model and need no locking. Solves run to
//! completion — a caller-supplied timeout around the solver stage is
//! the intended production extension, reported as a distinct outcome
//! from true infeasibility.
//!
//! # Example
//! ```
//! use slotmatch::engine::{solve, SolveConfig};
//! use slotmatch::models::{Participant, Slot};
//!
//! let participants = vec![Participant::new("kim"), Participant::new("lee")];
//! let slots = vec![Slot::new("13:00-13:30"), Slot::new("13:40-14:10")];
//!
//! let outcome = solve(&participants, &slots, &SolveConfig::default()).unwrap();
//! assert_eq!(outcome.total_assigned(), 2);
//! ```
//!
//! # Reference
//! Schrijver (2003), "Combinatorial Optimization", Ch. 21 (b-matchings)

mod model;
mod solve;

pub use model::AssignmentModel;

use log::debug;
use thiserror::Error;

use crate::models::{Participant, ScheduleOutcome, Slot};
use crate::validation::{validate_request, ValidationError};

/// Objective variants supported by the model builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Objective {
    /// Maximize the number of assigned participants. Slot order carries
    /// no preference; any maximum-cardinality assignment is optimal.
    MaxAssignments,
    /// Weight slot `j` of `S` by `S - j`. Every assignment still adds a
    /// positive term, so cardinality is rewarded, and earlier slots are
    /// worth strictly more. Not a lexicographic guarantee — see
    /// [`AssignmentModel::slot_weight`].
    #[default]
    EarliestFirst,
}

/// Engine configuration, supplied by the caller per solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    /// Objective variant.
    pub objective: Objective,
    /// Capacity applied to slots that don't declare their own (≥ 1).
    pub default_capacity: i32,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            objective: Objective::EarliestFirst,
            default_capacity: 1,
        }
    }
}

impl SolveConfig {
    /// Sets the objective variant.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Sets the default per-slot capacity.
    pub fn with_default_capacity(mut self, default_capacity: i32) -> Self {
        self.default_capacity = default_capacity;
        self
    }
}

/// Failure modes of one solve, recovered at the engine boundary.
///
/// Callers receive exactly one of these or a complete outcome; there is
/// no partial-success state and nothing panics through the API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Input failed validation; the solve never started.
    #[error("invalid assignment request: {}", summarize(.0))]
    Validation(Vec<ValidationError>),
    /// The constraint system admits no solution. Unreachable for the
    /// current constraint shape (the empty assignment is always
    /// feasible) but kept distinct for future constraint extensions.
    #[error("the assignment model admits no feasible solution")]
    Infeasible,
    /// The optimization procedure terminated abnormally.
    #[error("solver terminated abnormally: {0}")]
    Solver(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Solves one assignment request.
///
/// Validates the request, builds a fresh model, runs the solver to a
/// certified optimum, and extracts the outcome. Holds no state between
/// calls.
///
/// Degenerate requests (no participants or no slots) short-circuit to
/// the trivially optimal outcome without invoking the solver: with no
/// slots, every participant is unassigned.
pub fn solve(
    participants: &[Participant],
    slots: &[Slot],
    config: &SolveConfig,
) -> Result<ScheduleOutcome, SolveError> {
    validate_request(participants, slots, config.default_capacity)
        .map_err(SolveError::Validation)?;

    if participants.is_empty() || slots.is_empty() {
        debug!(
            "degenerate request ({} participants, {} slots), skipping solver",
            participants.len(),
            slots.len()
        );
        let mut outcome = ScheduleOutcome::new();
        outcome.unassigned = participants.to_vec();
        return Ok(outcome);
    }

    let model = AssignmentModel::build(participants, slots, config);
    debug!(
        "assignment model built: {} decisions, {} constraints",
        model.decision_count(),
        model.constraint_count()
    );

    let values = solve::solve_model(model)?;
    let outcome = solve::extract(&values, participants, slots);
    debug!(
        "solve complete: {} assigned, {} unassigned",
        outcome.total_assigned(),
        outcome.total_unassigned()
    );
    Ok(outcome)
}
