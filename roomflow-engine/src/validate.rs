//! Post-run validation: a structured report over the catalog, roster, and
//! stored tasks, including conflict findings. Non-fatal by design; the run
//! has already completed when this executes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use roomflow_core::{find_conflicts, Catalog, GeneratedTask, StaffMember, TaskStatus};

#[derive(Debug, Clone, Serialize)]
pub struct ValidationStatistics {
    pub total_templates: usize,
    pub total_staff: usize,
    pub total_scheduled_tasks: usize,
    pub active_days: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub statistics: ValidationStatistics,
}

pub fn validate_run(
    catalog: &Catalog,
    staff: &[StaffMember],
    tasks: &[GeneratedTask],
    now: DateTime<Utc>,
) -> ValidationReport {
    let mut issues = Vec::new();

    if catalog.is_empty() {
        issues.push("template catalog is empty".to_string());
    }
    if !staff.iter().any(|s| s.is_active) {
        issues.push("no active staff members".to_string());
    }

    let scheduled = tasks.iter().filter(|t| t.status == TaskStatus::Scheduled).count();
    if scheduled == 0 {
        issues.push("no scheduled tasks found".to_string());
    }

    for group in find_conflicts(tasks, now) {
        issues.push(format!(
            "conflict: staff {} has {} tasks at {}",
            group.staff_id,
            group.task_ids.len(),
            group.scheduled_time.to_rfc3339(),
        ));
    }

    let active_days: HashSet<_> = tasks.iter().map(|t| t.scheduled_date).collect();

    ValidationReport {
        is_valid: issues.is_empty(),
        issues,
        statistics: ValidationStatistics {
            total_templates: catalog.total_templates(),
            total_staff: staff.len(),
            total_scheduled_tasks: scheduled,
            active_days: active_days.len(),
        },
    }
}
