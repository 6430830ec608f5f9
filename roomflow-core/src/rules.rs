//! Recurring schedule rules: the lighter, template-independent policy used
//! for steady-state scheduling outside the bulk rolling-window setup.
//!
//! A rule carries its own frequency, base time of day, and staff-selection
//! strategy, then flows through the same distributor and materializer as
//! the bulk path.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::shift_clock::default_start;
use crate::template::{Frequency, TaskPriority, TaskTemplate, WILDCARD_ROOM_TYPE};

/// How the rule runner picks and orders staff before distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentRule {
    RoundRobin,
    SkillBased,
    MaintenanceStaff,
    ExperiencedStaff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRule {
    pub id: String,
    pub name: String,
    pub frequency: Frequency,
    /// Base time for the rule's slot queue; defaults to 09:00 when absent.
    pub time_of_day: Option<NaiveTime>,
    /// Weekly rules fire on this weekday (default Monday).
    pub day_of_week: Option<Weekday>,
    /// Monthly rules fire on this day of month (default the 1st).
    pub day_of_month: Option<u32>,
    pub room_types: BTreeSet<String>,
    pub task_type: String,
    pub priority: TaskPriority,
    pub assignment_rule: AssignmentRule,
    /// Estimated minutes for tasks this rule produces.
    pub estimated_duration_minutes: i32,
}

impl ScheduleRule {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        task_type: impl Into<String>,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            frequency,
            time_of_day: None,
            day_of_week: None,
            day_of_month: None,
            room_types: BTreeSet::new(),
            task_type: task_type.into(),
            priority: TaskPriority::Medium,
            assignment_rule: AssignmentRule::RoundRobin,
            estimated_duration_minutes: 45,
        }
    }

    pub fn at(mut self, time_of_day: NaiveTime) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    pub fn on_weekday(mut self, day: Weekday) -> Self {
        self.day_of_week = Some(day);
        self
    }

    pub fn on_day_of_month(mut self, day: u32) -> Self {
        self.day_of_month = Some(day);
        self
    }

    pub fn with_room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_types.insert(room_type.into());
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_assignment(mut self, assignment_rule: AssignmentRule) -> Self {
        self.assignment_rule = assignment_rule;
        self
    }

    pub fn with_duration(mut self, minutes: i32) -> Self {
        self.estimated_duration_minutes = minutes;
        self
    }

    /// Calendar gate for this rule on `date`. Occupancy-driven frequencies
    /// pass here and are decided per room by the frequency evaluator.
    pub fn is_due(&self, date: NaiveDate) -> bool {
        match self.frequency {
            Frequency::Daily => true,
            Frequency::Weekly => date.weekday() == self.day_of_week.unwrap_or(Weekday::Mon),
            Frequency::Monthly => date.day() == self.day_of_month.unwrap_or(1),
            Frequency::Checkout | Frequency::Checkin | Frequency::AsNeeded => true,
        }
    }

    pub fn base_time(&self) -> NaiveTime {
        self.time_of_day.unwrap_or_else(default_start)
    }

    pub fn applies_to(&self, room_type: &str) -> bool {
        self.room_types.is_empty()
            || self.room_types.contains(WILDCARD_ROOM_TYPE)
            || self.room_types.contains(room_type)
    }

    /// Synthesize a transient template so rule output shares the
    /// materializer with the bulk path.
    pub fn to_template(&self) -> TaskTemplate {
        TaskTemplate::new(&self.task_type, self.frequency)
            .with_priority(self.priority)
            .with_duration(self.estimated_duration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_rule_respects_day_of_week_override() {
        let rule = ScheduleRule::new("rule-1", "Linen change", "linen_change", Frequency::Weekly)
            .on_weekday(Weekday::Thu);

        let thursday = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert!(rule.is_due(thursday));
        assert!(!rule.is_due(monday));

        let default_rule =
            ScheduleRule::new("rule-2", "Deep clean", "deep_cleaning", Frequency::Weekly);
        assert!(default_rule.is_due(monday));
    }

    #[test]
    fn test_monthly_rule_respects_day_of_month_override() {
        let rule = ScheduleRule::new("rule-3", "Filters", "hvac_filter_check", Frequency::Monthly)
            .on_day_of_month(15);

        assert!(rule.is_due(NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()));
        assert!(!rule.is_due(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()));
    }

    #[test]
    fn test_base_time_defaults_to_nine() {
        let rule = ScheduleRule::new("rule-4", "Touch up", "touch_up", Frequency::Daily);
        assert_eq!(rule.base_time(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());

        let timed = rule.at(NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(timed.base_time(), NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    }

    #[test]
    fn test_room_type_matching_with_wildcard_and_empty_set() {
        let any = ScheduleRule::new("rule-5", "Inspect", "inspection", Frequency::Daily);
        assert!(any.applies_to("standard"));

        let suites = any.clone().with_room_type("suite");
        assert!(suites.applies_to("suite"));
        assert!(!suites.applies_to("standard"));

        let wildcard =
            ScheduleRule::new("rule-6", "All", "inspection", Frequency::Daily).with_room_type("all");
        assert!(wildcard.applies_to("standard"));
    }

    #[test]
    fn test_synthesized_template_carries_rule_fields() {
        let rule = ScheduleRule::new("rule-7", "Deep clean", "deep_cleaning", Frequency::Weekly)
            .with_priority(TaskPriority::High)
            .with_duration(90);

        let template = rule.to_template();
        assert_eq!(template.task_type, "deep_cleaning");
        assert_eq!(template.priority, TaskPriority::High);
        assert_eq!(template.estimated_duration_minutes, 90);
        assert_eq!(template.frequency, Frequency::Weekly);
    }
}
