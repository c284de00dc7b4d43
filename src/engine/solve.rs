//! Solver invocation and result extraction.
//!
//! The solver stage hands the built model to `good_lp`'s backend and
//! converts the outcome into plain decision values. The extractor then
//! reads those values into a [`ScheduleOutcome`] without touching the
//! solver again, so re-running extraction on the same values always
//! yields the same outcome.
//!
//! The constraint matrix is totally unimodular (a degree bound per
//! participant, a capacity bound per slot), so the optimum is integral
//! and the empty assignment is always feasible. Infeasibility is still
//! surfaced as its own error to keep the contract ready for tighter
//! constraint shapes.

use good_lp::{default_solver, ResolutionError, Solution, SolverModel};

use super::{AssignmentModel, SolveError};
use crate::models::{Participant, ScheduleOutcome, Slot};

/// Solved decision values, decoupled from solver internals.
pub(super) struct DecisionValues {
    /// `assigned[i][j]` is true when participant i takes slot j.
    pub(super) assigned: Vec<Vec<bool>>,
}

/// Runs the solver to a certified optimum.
///
/// Consumes the model; each solve owns its variables and discards them
/// afterwards. Maps solver outcomes onto the engine error taxonomy:
/// infeasibility is reported as [`SolveError::Infeasible`], any other
/// abnormal termination as [`SolveError::Solver`].
pub(super) fn solve_model(model: AssignmentModel) -> Result<DecisionValues, SolveError> {
    let AssignmentModel {
        vars,
        objective,
        constraints,
        decisions,
    } = model;

    let mut problem = vars.maximise(objective).using(default_solver);
    for constraint in constraints {
        problem.add_constraint(constraint);
    }

    let solution = problem.solve().map_err(|e| match e {
        ResolutionError::Infeasible => SolveError::Infeasible,
        other => SolveError::Solver(other.to_string()),
    })?;

    let assigned = decisions
        .iter()
        .map(|row| row.iter().map(|&x| solution.value(x) >= 0.5).collect())
        .collect();

    Ok(DecisionValues { assigned })
}

/// Reads solved decision values into an outcome.
///
/// Pure function of its inputs: slots keep catalog order, empty slots
/// are dropped, and every participant lands in exactly one of the
/// assigned or unassigned sets.
pub(super) fn extract(
    values: &DecisionValues,
    participants: &[Participant],
    slots: &[Slot],
) -> ScheduleOutcome {
    let mut outcome = ScheduleOutcome::new();

    for (j, slot) in slots.iter().enumerate() {
        let occupants: Vec<Participant> = participants
            .iter()
            .enumerate()
            .filter(|&(i, _)| values.assigned[i][j])
            .map(|(_, p)| p.clone())
            .collect();
        if !occupants.is_empty() {
            outcome.add_assignment(slot.clone(), occupants);
        }
    }

    outcome.unassigned = participants
        .iter()
        .enumerate()
        .filter(|&(i, _)| !values.assigned[i].iter().any(|&a| a))
        .map(|(_, p)| p.clone())
        .collect();

    outcome
}
