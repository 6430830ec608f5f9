//! Task materializer: turn a (template, room, staff, slot) tuple into a
//! concrete `GeneratedTask` with an independently-trackable checklist.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::room::Room;
use crate::staff::StaffMember;
use crate::task::{ChecklistItem, GeneratedTask, TaskSource, TaskStatus};
use crate::template::TaskTemplate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaterializeError {
    #[error("room reference has an empty id")]
    MissingRoom,
    #[error("staff reference has an empty id")]
    MissingStaff,
    #[error("template has an empty task type")]
    MissingTemplate,
}

/// Instantiate one task. The checklist is deep-copied with fresh item ids;
/// item count and required set are fixed from here on.
pub fn materialize(
    template: &TaskTemplate,
    room: &Room,
    staff: &StaffMember,
    scheduled_date: NaiveDate,
    scheduled_time: DateTime<Utc>,
    source: TaskSource,
) -> Result<GeneratedTask, MaterializeError> {
    if template.task_type.trim().is_empty() {
        return Err(MaterializeError::MissingTemplate);
    }
    if room.id.trim().is_empty() {
        return Err(MaterializeError::MissingRoom);
    }
    if staff.id.trim().is_empty() {
        return Err(MaterializeError::MissingStaff);
    }

    Ok(GeneratedTask {
        id: Uuid::new_v4().to_string(),
        title: format!("{} - Room {}", template.humanized_type(), room.number),
        task_type: template.task_type.clone(),
        priority: template.priority,
        room_id: room.id.clone(),
        room_number: room.number.clone(),
        assigned_to: staff.id.clone(),
        checklist: template
            .checklist
            .iter()
            .map(ChecklistItem::from_template)
            .collect(),
        estimated_duration_minutes: template.estimated_duration_minutes,
        scheduled_date,
        scheduled_time,
        status: TaskStatus::Scheduled,
        source,
    })
}
