//! Template catalog: task templates grouped by schedule and room type.
//!
//! Templates are immutable once a generation window has been produced from
//! them; edits create a new catalog version loaded by the next run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Room-type wildcard accepted in `ScheduleTemplate::room_types`.
pub const WILDCARD_ROOM_TYPE: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// How often a task type fires. Calendar frequencies are deterministic;
/// the occupancy-driven ones consult room status plus an occupancy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Checkout,
    Checkin,
    AsNeeded,
}

/// One checklist entry as authored in the catalog. Materialization copies
/// these into per-task items with their own ids and completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistTemplateItem {
    pub item: String,
    pub required: bool,
    pub estimated_time_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    /// Stable identifier-ish name, e.g. "checkout_cleaning".
    pub task_type: String,
    pub priority: TaskPriority,
    pub estimated_duration_minutes: i32,
    pub frequency: Frequency,
    pub instructions: Vec<String>,
    pub checklist: Vec<ChecklistTemplateItem>,
    pub required_skills: BTreeSet<String>,
    pub required_tools: Vec<String>,
    pub required_supplies: Vec<String>,
}

impl TaskTemplate {
    pub fn new(task_type: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            task_type: task_type.into(),
            priority: TaskPriority::Medium,
            estimated_duration_minutes: 45,
            frequency,
            instructions: Vec::new(),
            checklist: Vec::new(),
            required_skills: BTreeSet::new(),
            required_tools: Vec::new(),
            required_supplies: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_duration(mut self, minutes: i32) -> Self {
        self.estimated_duration_minutes = minutes;
        self
    }

    pub fn with_instruction(mut self, text: impl Into<String>) -> Self {
        self.instructions.push(text.into());
        self
    }

    pub fn with_checklist_item(
        mut self,
        item: impl Into<String>,
        required: bool,
        estimated_time_minutes: i32,
    ) -> Self {
        self.checklist.push(ChecklistTemplateItem {
            item: item.into(),
            required,
            estimated_time_minutes,
        });
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.insert(skill.into());
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.required_tools.push(tool.into());
        self
    }

    pub fn with_supply(mut self, supply: impl Into<String>) -> Self {
        self.required_supplies.push(supply.into());
        self
    }

    /// "checkout_cleaning" -> "Checkout Cleaning", used for task titles.
    pub fn humanized_type(&self) -> String {
        self.task_type
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Groups task templates under a name and a room-type set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    pub name: String,
    pub description: String,
    /// Room categories this schedule applies to; `"all"` is a wildcard.
    pub room_types: BTreeSet<String>,
    pub tasks: Vec<TaskTemplate>,
}

impl ScheduleTemplate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            room_types: BTreeSet::new(),
            tasks: Vec::new(),
        }
    }

    pub fn with_room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_types.insert(room_type.into());
        self
    }

    pub fn with_task(mut self, task: TaskTemplate) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn is_wildcard(&self) -> bool {
        self.room_types.contains(WILDCARD_ROOM_TYPE)
    }

    /// Explicit (non-wildcard) room-type match.
    pub fn covers(&self, room_type: &str) -> bool {
        self.room_types.contains(room_type)
    }
}

/// The full template catalog loaded for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub schedules: Vec<ScheduleTemplate>,
}

impl Catalog {
    pub fn new(schedules: Vec<ScheduleTemplate>) -> Self {
        Self { schedules }
    }

    pub fn push(&mut self, schedule: ScheduleTemplate) {
        self.schedules.push(schedule);
    }

    /// First schedule explicitly listing `room_type`; otherwise the first
    /// wildcard schedule.
    pub fn find_for_room_type(&self, room_type: &str) -> Option<&ScheduleTemplate> {
        self.schedules
            .iter()
            .find(|s| s.covers(room_type))
            .or_else(|| self.schedules.iter().find(|s| s.is_wildcard()))
    }

    pub fn total_templates(&self) -> usize {
        self.schedules.iter().map(|s| s.tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_templates() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ScheduleTemplate::new("Suites", "suite program")
                .with_room_type("suite")
                .with_task(TaskTemplate::new("deep_cleaning", Frequency::Weekly)),
            ScheduleTemplate::new("Everything else", "fallback")
                .with_room_type(WILDCARD_ROOM_TYPE)
                .with_task(TaskTemplate::new("daily_cleaning", Frequency::Daily)),
        ])
    }

    #[test]
    fn test_explicit_room_type_wins_over_wildcard() {
        let c = catalog();
        assert_eq!(c.find_for_room_type("suite").unwrap().name, "Suites");
        assert_eq!(
            c.find_for_room_type("standard").unwrap().name,
            "Everything else"
        );
    }

    #[test]
    fn test_no_wildcard_means_no_fallback() {
        let c = Catalog::new(vec![
            ScheduleTemplate::new("Suites", "")
                .with_room_type("suite")
                .with_task(TaskTemplate::new("deep_cleaning", Frequency::Weekly)),
        ]);
        assert!(c.find_for_room_type("standard").is_none());
    }

    #[test]
    fn test_humanized_type_for_titles() {
        let t = TaskTemplate::new("checkout_cleaning", Frequency::Checkout);
        assert_eq!(t.humanized_type(), "Checkout Cleaning");

        let t = TaskTemplate::new("hvac_filter_check", Frequency::Monthly);
        assert_eq!(t.humanized_type(), "Hvac Filter Check");
    }

    #[test]
    fn test_catalog_counts_templates_across_schedules() {
        let c = catalog();
        assert_eq!(c.total_templates(), 2);
        assert!(!c.is_empty());
        assert!(Catalog::default().is_empty());
    }

    #[test]
    fn test_frequency_serializes_snake_case() {
        let json = serde_json::to_string(&Frequency::AsNeeded).unwrap();
        assert_eq!(json, "\"as_needed\"");
    }
}
