//! Scheduled-time calculation: shift start tables, the ordinal slot form,
//! and the duration-aware per-staff timeline cursor.

use std::collections::HashMap;

use chrono::{Duration, NaiveTime};

use crate::staff::{Shift, StaffMember};

/// Default slot width where no template duration exists (rule-engine tasks).
pub const DEFAULT_SLOT_MINUTES: i64 = 45;

pub fn shift_start(shift: Shift) -> NaiveTime {
    let (h, m) = match shift {
        Shift::Morning => (8, 0),
        Shift::Afternoon => (14, 0),
        Shift::Evening => (18, 0),
        Shift::Night => (22, 0),
    };
    NaiveTime::from_hms_opt(h, m, 0).expect("shift start table holds valid times")
}

/// Start used when no shift applies (rule-engine tasks without a time of day).
pub fn default_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid default start")
}

/// Slot form: `base + (ordinal - 1) * slot_minutes`, `ordinal` 1-based.
pub fn slot_start_from(base: NaiveTime, ordinal: u32, slot_minutes: i64) -> NaiveTime {
    base + Duration::minutes(slot_minutes * (ordinal.max(1) as i64 - 1))
}

/// Back-to-back queue from the shift start at the default slot width.
pub fn slot_start(shift: Shift, ordinal: u32) -> NaiveTime {
    slot_start_from(shift_start(shift), ordinal, DEFAULT_SLOT_MINUTES)
}

/// Per-staff running timeline for one day. Each task starts where the
/// previous one ended, advanced by that task's own estimated duration, so
/// mixed-duration catalogs produce a non-overlapping queue.
#[derive(Debug, Default)]
pub struct TimelineCursor {
    next_free: HashMap<String, NaiveTime>,
}

impl TimelineCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next start for `staff` and advance their cursor by
    /// `duration_minutes`.
    pub fn next_start(&mut self, staff: &StaffMember, duration_minutes: i32) -> NaiveTime {
        let start = *self
            .next_free
            .entry(staff.id.clone())
            .or_insert_with(|| shift_start(staff.shift));
        let advance = Duration::minutes(duration_minutes.max(1) as i64);
        self.next_free.insert(staff.id.clone(), start + advance);
        start
    }
}
