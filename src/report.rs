//! Rotation reporting and export.
//!
//! Computes the per-process statistics shown alongside a rotated
//! roster — headcount and share per shift letter, current versus next
//! period, and how many people have left — and writes the rotated
//! roster as CSV with the next shift in front of the current one.

use std::io;

use crate::models::{ShiftLetter, ShiftState};
use crate::rotation::RotatedEmployee;

/// Headcount per shift letter within one process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftCounts {
    counts: [usize; ShiftLetter::ALL.len()],
    total: usize,
}

impl ShiftCounts {
    fn tally(&mut self, state: ShiftState) {
        if let Some(letter) = state.letter() {
            self.counts[letter.index()] += 1;
            self.total += 1;
        }
    }

    /// Employees holding the given letter.
    pub fn count(&self, letter: ShiftLetter) -> usize {
        self.counts[letter.index()]
    }

    /// Share of active employees holding the given letter (0.0..1.0).
    /// Zero when the process has no active employees.
    pub fn share(&self, letter: ShiftLetter) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(letter) as f64 / self.total as f64
        }
    }

    /// Active employees counted.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Current-versus-next shift statistics for one process.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftDistribution {
    /// Process name.
    pub process: String,
    /// Headcounts in the current period.
    pub current: ShiftCounts,
    /// Headcounts after rotation.
    pub next: ShiftCounts,
    /// Employees of this process who have left.
    pub retired: usize,
}

/// Computes per-process shift distributions from a rotated roster.
///
/// Processes appear in first-appearance order. Retired employees are
/// excluded from the letter headcounts and reported separately.
pub fn shift_distributions(rotated: &[RotatedEmployee]) -> Vec<ShiftDistribution> {
    let mut distributions: Vec<ShiftDistribution> = Vec::new();

    for r in rotated {
        let process = &r.record.process;
        let index = match distributions.iter().position(|d| &d.process == process) {
            Some(i) => i,
            None => {
                distributions.push(ShiftDistribution {
                    process: process.clone(),
                    current: ShiftCounts::default(),
                    next: ShiftCounts::default(),
                    retired: 0,
                });
                distributions.len() - 1
            }
        };
        let entry = &mut distributions[index];

        if r.record.current_shift.is_retired() {
            entry.retired += 1;
        } else {
            entry.current.tally(r.record.current_shift);
            entry.next.tally(r.next_shift);
        }
    }

    distributions
}

/// Writes a rotated roster as CSV.
///
/// Column order puts the next shift ahead of the current one, matching
/// the hand-off format the roster owners circulate:
/// `id,name,next_shift,entry_date,process,position,current_shift`.
pub fn write_rotation_csv<W: io::Write>(
    writer: W,
    rotated: &[RotatedEmployee],
) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([
        "id",
        "name",
        "next_shift",
        "entry_date",
        "process",
        "position",
        "current_shift",
    ])?;

    for r in rotated {
        out.write_record([
            r.record.id.as_str(),
            r.record.name.as_str(),
            &r.next_shift.to_string(),
            r.record.entry_date.as_str(),
            r.record.process.as_str(),
            r.record.position.as_str(),
            &r.record.current_shift.to_string(),
        ])?;
    }

    out.flush()?;
    Ok(())
}
