//! Capacity-bounded assignment of participants to time slots.
//!
//! Given a roster of participants and an ordered catalog of slots, the
//! engine computes an exact assignment that serves as many participants
//! as possible and, among equally large assignments, prefers earlier
//! slots. Around the engine sit the plain data transformations of the
//! same workflow: catalog generation from a daily time window,
//! pasted-roster parsing, shift-letter rotation, and reporting.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Participant`, `Slot`,
//!   `ScheduleOutcome`, `EmployeeRecord`, `ShiftLetter`
//! - **`validation`**: Input integrity checks (blank identifiers,
//!   duplicate slots, negative capacities)
//! - **`engine`**: Model builder, exact solver, result extraction
//! - **`catalog`**: Slot generation from start/end times, duration,
//!   and break length
//! - **`roster`**: Pasted-text parsing into participants and employees
//! - **`rotation`**: Cyclic shift-letter rotation with seeded
//!   per-process rebalancing
//! - **`report`**: Per-process shift statistics and CSV export
//!
//! # Architecture
//!
//! One solve is one pure function call: validate, build a fresh model,
//! run the solver to a certified optimum, read the result out. Nothing
//! is shared between invocations, so concurrent callers need no
//! coordination. Errors are a tagged result at the engine boundary,
//! never a panic.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveTime;
//! use slotmatch::catalog::CatalogConfig;
//! use slotmatch::engine::{solve, SolveConfig};
//! use slotmatch::roster::parse_participants;
//!
//! let participants = parse_participants("kim\nlee\npark\n");
//! let slots = CatalogConfig::new(
//!     NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
//!     30,
//! )
//! .with_break(10)
//! .generate();
//!
//! let outcome = solve(&participants, &slots, &SolveConfig::default()).unwrap();
//! assert_eq!(outcome.total_assigned(), 3);
//! assert!(outcome.participants_in("13:00-13:30").is_some());
//! ```

pub mod catalog;
pub mod engine;
pub mod models;
pub mod report;
pub mod roster;
pub mod rotation;
pub mod validation;
