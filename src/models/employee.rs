//! Employee roster and shift-letter models.
//!
//! An employee record mirrors one pasted roster line:
//! `id name shift entry_date process position`. The shift field is a
//! letter from a fixed seven-letter cycle, or a retirement marker that
//! exempts the employee from rotation. Entry date is carried verbatim;
//! nothing downstream interprets it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One letter of the fixed shift cycle.
///
/// Rotation advances each letter to its cyclic successor: A→B→…→G→A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl ShiftLetter {
    /// The cycle, in rotation order.
    pub const ALL: [ShiftLetter; 7] = [
        ShiftLetter::A,
        ShiftLetter::B,
        ShiftLetter::C,
        ShiftLetter::D,
        ShiftLetter::E,
        ShiftLetter::F,
        ShiftLetter::G,
    ];

    /// Position within the cycle (A = 0).
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&l| l == self).unwrap_or(0)
    }

    /// The cyclic successor.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Parses a single shift letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            _ => None,
        }
    }

    /// The letter as a character.
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
        }
    }
}

impl fmt::Display for ShiftLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Shift status of one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftState {
    /// Working a letter of the cycle.
    Active(ShiftLetter),
    /// Left the company; excluded from rotation and headcounts.
    Retired,
}

impl ShiftState {
    /// Parses a roster shift field: a single letter, or a retirement
    /// marker (`-` or `retired`, case-insensitive).
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        if code == "-" || code.eq_ignore_ascii_case("retired") {
            return Some(Self::Retired);
        }
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ShiftLetter::from_char(c).map(Self::Active),
            _ => None,
        }
    }

    /// The shift letter, if active.
    pub fn letter(self) -> Option<ShiftLetter> {
        match self {
            Self::Active(l) => Some(l),
            Self::Retired => None,
        }
    }

    /// Whether this employee has left.
    pub fn is_retired(self) -> bool {
        matches!(self, Self::Retired)
    }
}

impl fmt::Display for ShiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active(l) => l.fmt(f),
            Self::Retired => write!(f, "retired"),
        }
    }
}

/// One employee, as parsed from a pasted roster line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee number.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Shift held this month.
    pub current_shift: ShiftState,
    /// Hire date, carried verbatim.
    pub entry_date: String,
    /// Production process (rotation rebalances within a process).
    pub process: String,
    /// Job grade, carried verbatim.
    pub position: String,
}

impl EmployeeRecord {
    /// Creates a record with empty free-text fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, current_shift: ShiftState) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_shift,
            entry_date: String::new(),
            process: String::new(),
            position: String::new(),
        }
    }

    /// Sets the entry date.
    pub fn with_entry_date(mut self, entry_date: impl Into<String>) -> Self {
        self.entry_date = entry_date.into();
        self
    }

    /// Sets the process.
    pub fn with_process(mut self, process: impl Into<String>) -> Self {
        self.process = process.into();
        self
    }

    /// Sets the position.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }
}
