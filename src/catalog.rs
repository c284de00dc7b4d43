//! Slot catalog generation.
//!
//! Produces an ordered list of candidate slots from a daily time window:
//! start time, end time, slot duration, and break length, all in
//! minutes. Labels are formatted as `"HH:MM-HH:MM"`. A window whose end
//! is at or before its start wraps past midnight (13:00 → 01:00 is a
//! twelve-hour window).
//!
//! Excluded labels are filtered out of the result but never change the
//! cadence of the remaining slots.

use chrono::{NaiveTime, Timelike};
use std::collections::HashSet;

use crate::models::Slot;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parameters for one catalog generation.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// First moment a slot may start.
    pub start: NaiveTime,
    /// Moment the window closes. At or before `start` means the window
    /// runs past midnight into the next day.
    pub end: NaiveTime,
    /// Length of each slot in minutes.
    pub slot_minutes: i64,
    /// Gap between consecutive slots in minutes.
    pub break_minutes: i64,
    /// Explicit capacity for every generated slot, or `None` to defer
    /// to the engine's configured default.
    pub capacity: Option<i32>,
    /// Labels to drop from the result.
    pub excluded: HashSet<String>,
}

impl CatalogConfig {
    /// Creates a config with no breaks, default capacity, and no exclusions.
    pub fn new(start: NaiveTime, end: NaiveTime, slot_minutes: i64) -> Self {
        Self {
            start,
            end,
            slot_minutes,
            break_minutes: 0,
            capacity: None,
            excluded: HashSet::new(),
        }
    }

    /// Sets the break between slots.
    pub fn with_break(mut self, break_minutes: i64) -> Self {
        self.break_minutes = break_minutes;
        self
    }

    /// Sets an explicit capacity for every generated slot.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Excludes one slot label from the result.
    pub fn without_slot(mut self, label: impl Into<String>) -> Self {
        self.excluded.insert(label.into());
        self
    }

    /// Generates the ordered slot catalog.
    ///
    /// Slots are emitted while a full slot still fits before the window
    /// closes; the cursor then advances by duration plus break. Returns
    /// an empty catalog when the slot duration is below one minute,
    /// since the cursor could never advance.
    pub fn generate(&self) -> Vec<Slot> {
        if self.slot_minutes < 1 || self.break_minutes < 0 {
            return Vec::new();
        }

        let mut cursor = minute_of_day(self.start);
        let mut close = minute_of_day(self.end);
        if close <= cursor {
            close += MINUTES_PER_DAY; // window wraps past midnight
        }

        let mut catalog = Vec::new();
        while cursor + self.slot_minutes <= close {
            let slot_end = cursor + self.slot_minutes;
            let label = format!("{}-{}", format_minute(cursor), format_minute(slot_end));
            if !self.excluded.contains(&label) {
                let slot = match self.capacity {
                    Some(capacity) => Slot::new(&label).with_capacity(capacity),
                    None => Slot::new(&label),
                };
                catalog.push(slot);
            }
            cursor = slot_end + self.break_minutes;
        }

        catalog
    }
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

fn format_minute(minutes: i64) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}
