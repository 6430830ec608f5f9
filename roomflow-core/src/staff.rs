//! Staff roster records: role, shift, skills, capacity, working days.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Housekeeper,
    Supervisor,
    Maintenance,
}

/// Working shift. Start times live in `crate::shift_clock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// A staff member as supplied by the staff directory.
///
/// Soft-disabled staff (`is_active == false`) stay in the roster but are
/// never assigned work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: StaffRole,
    pub shift: Shift,
    pub skills: BTreeSet<String>,
    pub max_rooms_per_day: u32,
    pub working_days: HashSet<Weekday>,
    pub is_active: bool,
}

impl StaffMember {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: StaffRole,
        shift: Shift,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            shift,
            skills: BTreeSet::new(),
            max_rooms_per_day: 8,
            working_days: [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]
            .into_iter()
            .collect(),
            is_active: true,
        }
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    pub fn with_capacity(mut self, max_rooms_per_day: u32) -> Self {
        self.max_rooms_per_day = max_rooms_per_day;
        self
    }

    pub fn with_working_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.working_days = days.into_iter().collect();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether this staff member can be scheduled on `date`.
    pub fn works_on(&self, date: NaiveDate) -> bool {
        self.is_active && self.working_days.contains(&date.weekday())
    }

    /// True when at least one of `wanted` appears in this member's skills.
    pub fn has_any_skill<S: AsRef<str>>(&self, wanted: &[S]) -> bool {
        wanted.iter().any(|s| self.skills.contains(s.as_ref()))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("staff id must be non-empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("staff name must be non-empty".to_string());
        }
        if self.max_rooms_per_day == 0 {
            return Err("max_rooms_per_day must be at least 1".to_string());
        }
        Ok(())
    }
}
