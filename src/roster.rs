//! Pasted-roster parsing.
//!
//! Both input surfaces accept text pasted straight out of a spreadsheet
//! or chat message:
//! - [`parse_participants`]: one name per line, trimmed, blanks skipped.
//! - [`parse_employees`]: whitespace-separated
//!   `id name shift entry_date process position` lines.
//!
//! The engine never validates identifier syntax; this module is the
//! place where raw text becomes typed records, so malformed employee
//! lines fail here with the line number attached.

use thiserror::Error;

use crate::models::{EmployeeRecord, Participant, ShiftState};

/// Fields expected on one employee line.
const EMPLOYEE_FIELDS: usize = 6;

/// A roster line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A line did not split into the expected number of fields.
    #[error("line {line}: expected {EMPLOYEE_FIELDS} fields (id name shift entry_date process position), got {found}")]
    MalformedLine {
        /// 1-based line number within the pasted text.
        line: usize,
        /// Number of whitespace-separated fields found.
        found: usize,
    },
    /// The shift field was neither a cycle letter nor a retirement marker.
    #[error("line {line}: unknown shift code '{code}'")]
    UnknownShift {
        /// 1-based line number within the pasted text.
        line: usize,
        /// The offending field content.
        code: String,
    },
}

/// Parses a pasted participant list: one identifier per line.
///
/// Lines are trimmed; blank lines are skipped. No deduplication — the
/// engine treats repeated identifiers as independent entries, and
/// typical callers deduplicate upstream if they want to.
pub fn parse_participants(text: &str) -> Vec<Participant> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Participant::from)
        .collect()
}

/// Parses a pasted employee roster.
///
/// Each non-blank line must carry exactly six whitespace-separated
/// fields: `id name shift entry_date process position`. The first
/// malformed line aborts the parse with its position.
pub fn parse_employees(text: &str) -> Result<Vec<EmployeeRecord>, RosterError> {
    let mut records = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.len() != EMPLOYEE_FIELDS {
            return Err(RosterError::MalformedLine {
                line,
                found: fields.len(),
            });
        }

        let shift = ShiftState::parse(fields[2]).ok_or_else(|| RosterError::UnknownShift {
            line,
            code: fields[2].to_string(),
        })?;

        records.push(
            EmployeeRecord::new(fields[0], fields[1], shift)
                .with_entry_date(fields[3])
                .with_process(fields[4])
                .with_position(fields[5]),
        );
    }

    Ok(records)
}
