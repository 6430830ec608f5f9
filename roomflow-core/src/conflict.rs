//! Conflict validator: detect double-bookings after generation.
//!
//! Two tasks conflict when the same staff member is scheduled at the exact
//! same instant. Distinct staff at the same instant is fine. This check is
//! independent of (and stricter than) the distributor's capacity limit.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::task::{GeneratedTask, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGroup {
    pub staff_id: String,
    pub scheduled_time: DateTime<Utc>,
    pub task_ids: Vec<String>,
}

/// Group still-scheduled future tasks by (assignee, scheduled time); every
/// group with more than one member is a conflict. Output is sorted for
/// stable reporting.
///
/// The gate is on `scheduled_date`: only tasks dated strictly after `now`'s
/// date are checked. Same-day tasks are already in execution and out of
/// scope here.
pub fn find_conflicts(tasks: &[GeneratedTask], now: DateTime<Utc>) -> Vec<ConflictGroup> {
    let mut groups: HashMap<(String, DateTime<Utc>), Vec<String>> = HashMap::new();

    let today = now.date_naive();
    for task in tasks {
        if task.status != TaskStatus::Scheduled || task.scheduled_date <= today {
            continue;
        }
        groups
            .entry((task.assigned_to.clone(), task.scheduled_time))
            .or_default()
            .push(task.id.clone());
    }

    let mut conflicts: Vec<ConflictGroup> = groups
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|((staff_id, scheduled_time), mut task_ids)| {
            task_ids.sort();
            ConflictGroup {
                staff_id,
                scheduled_time,
                task_ids,
            }
        })
        .collect();

    conflicts.sort_by(|a, b| {
        a.staff_id
            .cmp(&b.staff_id)
            .then(a.scheduled_time.cmp(&b.scheduled_time))
    });
    conflicts
}
