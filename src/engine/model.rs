//! Assignment model construction.
//!
//! Translates a (participants, slots) pair into a binary optimization
//! model: one decision variable per (participant, slot) edge, a degree
//! bound per participant, a capacity bound per slot, and an objective
//! chosen by configuration. The model is pure data until handed to the
//! solver stage; nothing here invokes a solver.
//!
//! # Reference
//! Schrijver (2003), "Combinatorial Optimization", Ch. 21 (b-matchings)

use good_lp::{variable, variables, Constraint, Expression, ProblemVariables, Variable};

use super::{Objective, SolveConfig};
use crate::models::{Participant, Slot};

/// A built constraint system for one solve.
///
/// Holds the full P×S decision grid, the per-participant and per-slot
/// constraints, and the objective expression. Consumed by the solver
/// stage; a new model is built for every call.
pub struct AssignmentModel {
    pub(super) vars: ProblemVariables,
    pub(super) objective: Expression,
    pub(super) constraints: Vec<Constraint>,
    /// `decisions[i][j]` means "participant i takes slot j".
    pub(super) decisions: Vec<Vec<Variable>>,
}

impl AssignmentModel {
    /// Builds the constraint system for the given request.
    ///
    /// Creates:
    /// - A binary variable `x_{i}_{j}` per (participant, slot) pair
    /// - Per participant i: `sum_j x[i][j] <= 1`
    /// - Per slot j: `sum_i x[i][j] <= capacity[j]`
    /// - The configured objective (see [`Objective`])
    ///
    /// Callers are expected to have validated the request and ruled out
    /// the degenerate empty cases beforehand.
    pub fn build(participants: &[Participant], slots: &[Slot], config: &SolveConfig) -> Self {
        let mut vars = variables!();

        let decisions: Vec<Vec<Variable>> = (0..participants.len())
            .map(|i| {
                (0..slots.len())
                    .map(|j| vars.add(variable().binary().name(format!("x_{i}_{j}"))))
                    .collect()
            })
            .collect();

        let objective = Self::objective_expression(&decisions, slots.len(), config.objective);

        let mut constraints = Vec::with_capacity(participants.len() + slots.len());

        // Each participant takes at most one slot.
        for row in &decisions {
            let taken = row
                .iter()
                .fold(Expression::from(0.0), |acc, &x| acc + x);
            constraints.push(taken.leq(1.0));
        }

        // Each slot holds at most its capacity.
        for (j, slot) in slots.iter().enumerate() {
            let occupancy = decisions
                .iter()
                .fold(Expression::from(0.0), |acc, row| acc + row[j]);
            let capacity = slot.effective_capacity(config.default_capacity);
            constraints.push(occupancy.leq(f64::from(capacity)));
        }

        Self {
            vars,
            objective,
            constraints,
            decisions,
        }
    }

    /// Number of binary decisions (P×S).
    pub fn decision_count(&self) -> usize {
        self.decisions.iter().map(|row| row.len()).sum()
    }

    /// Number of constraints (P + S).
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Objective weight applied to slot `j` of `slot_count`.
    ///
    /// Earliest-first weights slot j as `S - j`: strictly decreasing in
    /// j and always positive, so every extra assignment still improves
    /// the objective. This is the documented weighting, not a strict
    /// lexicographic count-then-earliness objective.
    pub fn slot_weight(objective: Objective, slot_count: usize, j: usize) -> f64 {
        match objective {
            Objective::MaxAssignments => 1.0,
            Objective::EarliestFirst => (slot_count - j) as f64,
        }
    }

    fn objective_expression(
        decisions: &[Vec<Variable>],
        slot_count: usize,
        objective: Objective,
    ) -> Expression {
        decisions.iter().fold(Expression::from(0.0), |acc, row| {
            row.iter().enumerate().fold(acc, |acc, (j, &x)| {
                acc + Self::slot_weight(objective, slot_count, j) * x
            })
        })
    }
}
