//! Generated work items: the materialized output of one template firing on
//! one room on one day.
//!
//! Tasks are immutable at creation time for this engine; execution tracking
//! (checklist completion, photos) belongs to a downstream collaborator and
//! only flips the completion fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::template::{ChecklistTemplateItem, TaskPriority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// Which pipeline produced the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSource {
    BulkSetup,
    RecurringRule,
}

/// An instantiated checklist entry. Gets a fresh id at materialization so it
/// can be tracked independently of its template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub item: String,
    pub required: bool,
    pub estimated_time_minutes: i32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub completed_by: Option<String>,
}

impl ChecklistItem {
    pub fn from_template(entry: &ChecklistTemplateItem) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            item: entry.item.clone(),
            required: entry.required,
            estimated_time_minutes: entry.estimated_time_minutes,
            completed: false,
            completed_at: None,
            completed_by: None,
        }
    }
}

/// A concrete, assigned, time-slotted work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTask {
    pub id: String,
    /// E.g. "Checkout Cleaning - Room 204".
    pub title: String,
    pub task_type: String,
    pub priority: TaskPriority,
    pub room_id: String,
    pub room_number: String,
    /// Staff member id.
    pub assigned_to: String,
    pub checklist: Vec<ChecklistItem>,
    pub estimated_duration_minutes: i32,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: DateTime<Utc>,
    pub status: TaskStatus,
    pub source: TaskSource,
}

impl GeneratedTask {
    /// Idempotent-upsert key: re-running a window replaces rather than
    /// duplicates a day's output.
    pub fn upsert_key(&self) -> (String, String, NaiveDate) {
        (
            self.room_id.clone(),
            self.task_type.clone(),
            self.scheduled_date,
        )
    }
}
