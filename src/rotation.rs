//! Shift-letter rotation.
//!
//! Advances every active employee's shift letter to its cyclic
//! successor (A→B→…→G→A), then rebalances the F→G transition: within
//! each process, no more employees may advance into G than currently
//! hold G there. The excess is chosen by random sample and held back at
//! F. Retired employees never rotate.
//!
//! The sample is drawn from an explicitly seeded RNG, so a given
//! (roster, seed) pair always rotates the same way.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::models::{EmployeeRecord, ShiftLetter, ShiftState};

/// One employee together with their shift for the next period.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedEmployee {
    /// The input record, unchanged.
    pub record: EmployeeRecord,
    /// The shift assigned for the next period.
    pub next_shift: ShiftState,
}

impl RotatedEmployee {
    /// Whether this employee was held back by rebalancing.
    pub fn held_back(&self) -> bool {
        match (self.record.current_shift, self.next_shift) {
            (ShiftState::Active(current), ShiftState::Active(next)) => current == next,
            _ => false,
        }
    }
}

/// Rotates a roster forward by one period.
///
/// Output order matches input order. The `seed` fixes the rebalancing
/// sample; two calls with the same roster and seed agree exactly.
pub fn rotate_shifts(employees: &[EmployeeRecord], seed: u64) -> Vec<RotatedEmployee> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut rotated: Vec<RotatedEmployee> = employees
        .iter()
        .map(|e| RotatedEmployee {
            record: e.clone(),
            next_shift: match e.current_shift {
                ShiftState::Active(letter) => ShiftState::Active(letter.next()),
                ShiftState::Retired => ShiftState::Retired,
            },
        })
        .collect();

    // Cap F→G advancement per process at the current G headcount.
    for process in processes_in_order(employees) {
        let advancing: Vec<usize> = rotated
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                r.record.process == process
                    && r.record.current_shift == ShiftState::Active(ShiftLetter::F)
                    && r.next_shift == ShiftState::Active(ShiftLetter::G)
            })
            .map(|(i, _)| i)
            .collect();

        let g_headcount = employees
            .iter()
            .filter(|e| {
                e.process == process && e.current_shift == ShiftState::Active(ShiftLetter::G)
            })
            .count();

        if advancing.len() > g_headcount {
            let excess = advancing.len() - g_headcount;
            debug!(
                "process '{}': holding back {} of {} F-to-G advancements",
                process,
                excess,
                advancing.len()
            );
            let held: Vec<usize> = advancing
                .choose_multiple(&mut rng, excess)
                .copied()
                .collect();
            for index in held {
                rotated[index].next_shift = ShiftState::Active(ShiftLetter::F);
            }
        }
    }

    rotated
}

/// Distinct processes in first-appearance order.
fn processes_in_order(employees: &[EmployeeRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for e in employees {
        if !seen.contains(&e.process) {
            seen.push(e.process.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, shift: ShiftState, process: &str) -> EmployeeRecord {
        EmployeeRecord::new(id, id, shift).with_process(process)
    }

    fn active(letter: ShiftLetter) -> ShiftState {
        ShiftState::Active(letter)
    }

    #[test]
    fn test_plain_rotation_advances_each_letter() {
        let roster = vec![
            employee("1", active(ShiftLetter::A), "p1"),
            employee("2", active(ShiftLetter::D), "p1"),
            employee("3", active(ShiftLetter::G), "p1"),
        ];
        let rotated = rotate_shifts(&roster, 0);

        assert_eq!(rotated[0].next_shift, active(ShiftLetter::B));
        assert_eq!(rotated[1].next_shift, active(ShiftLetter::E));
        assert_eq!(rotated[2].next_shift, active(ShiftLetter::A)); // G wraps
    }

    #[test]
    fn test_retired_never_rotate() {
        let roster = vec![employee("1", ShiftState::Retired, "p1")];
        let rotated = rotate_shifts(&roster, 0);
        assert_eq!(rotated[0].next_shift, ShiftState::Retired);
    }

    #[test]
    fn test_f_advancement_capped_at_g_headcount() {
        // Three at F, one at G: exactly one may advance into G.
        let roster = vec![
            employee("f1", active(ShiftLetter::F), "p1"),
            employee("f2", active(ShiftLetter::F), "p1"),
            employee("f3", active(ShiftLetter::F), "p1"),
            employee("g1", active(ShiftLetter::G), "p1"),
        ];
        let rotated = rotate_shifts(&roster, 42);

        let advanced = rotated
            .iter()
            .filter(|r| r.next_shift == active(ShiftLetter::G))
            .count();
        let held = rotated.iter().filter(|r| r.held_back()).count();
        assert_eq!(advanced, 1);
        assert_eq!(held, 2);
    }

    #[test]
    fn test_no_holdback_when_g_headcount_suffices() {
        let roster = vec![
            employee("f1", active(ShiftLetter::F), "p1"),
            employee("g1", active(ShiftLetter::G), "p1"),
            employee("g2", active(ShiftLetter::G), "p1"),
        ];
        let rotated = rotate_shifts(&roster, 7);
        assert_eq!(rotated[0].next_shift, active(ShiftLetter::G));
        assert!(rotated.iter().all(|r| !r.held_back()));
    }

    #[test]
    fn test_rebalancing_is_per_process() {
        // p1 has no G holder, p2 has one: p1's F is held, p2's advances.
        let roster = vec![
            employee("f1", active(ShiftLetter::F), "p1"),
            employee("f2", active(ShiftLetter::F), "p2"),
            employee("g1", active(ShiftLetter::G), "p2"),
        ];
        let rotated = rotate_shifts(&roster, 3);

        assert_eq!(rotated[0].next_shift, active(ShiftLetter::F));
        assert_eq!(rotated[1].next_shift, active(ShiftLetter::G));
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let roster: Vec<EmployeeRecord> = (0..10)
            .map(|i| employee(&format!("f{i}"), active(ShiftLetter::F), "p1"))
            .chain((0..3).map(|i| employee(&format!("g{i}"), active(ShiftLetter::G), "p1")))
            .collect();

        let first = rotate_shifts(&roster, 99);
        let second = rotate_shifts(&roster, 99);
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_order_matches_input() {
        let roster = vec![
            employee("1", active(ShiftLetter::B), "p1"),
            employee("2", active(ShiftLetter::C), "p2"),
        ];
        let rotated = rotate_shifts(&roster, 0);
        assert_eq!(rotated[0].record.id, "1");
        assert_eq!(rotated[1].record.id, "2");
    }
}
