//! Rolling-window schedule generator.
//!
//! For each day in the window: filter staff to who actually works that day,
//! distribute all eligible rooms across them, then fire each matching
//! template through the frequency evaluator and materialize the hits.
//! Persistence is batched per day; a failed day is recorded and the run
//! continues.

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use tracing::{info, warn};

use roomflow_core::{
    distribute, local_to_utc, materialize, should_fire, AssignmentOutcome, Catalog, GeneratedTask,
    OccupancySource, Room, StaffMember, TaskSource, TimelineCursor, WorkloadLedger,
};

use crate::error::EngineError;
use crate::store::TaskStore;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub start_date: NaiveDate,
    pub window_days: u32,
    pub timezone: Tz,
}

impl GeneratorConfig {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            window_days: 7,
            timezone: chrono_tz::UTC,
        }
    }

    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    pub tasks_scheduled: usize,
    pub days_processed: u32,
    pub days_skipped_no_staff: u32,
    /// Days whose batch failed to persist; re-run just these (upserts make
    /// that safe).
    pub failed_days: Vec<NaiveDate>,
    pub over_capacity_assignments: usize,
    pub warnings: Vec<String>,
}

impl GenerationSummary {
    pub fn summary(&self) -> String {
        format!(
            "scheduled {} tasks over {} days ({} skipped for no staff, {} failed to persist, {} over-capacity assignments)",
            self.tasks_scheduled,
            self.days_processed,
            self.days_skipped_no_staff,
            self.failed_days.len(),
            self.over_capacity_assignments,
        )
    }
}

/// Generate and persist the whole window. Fatal configuration errors
/// (empty catalog/roster) surface before anything is written.
pub fn generate_window(
    catalog: &Catalog,
    rooms: &[Room],
    staff: &[StaffMember],
    occupancy: &mut dyn OccupancySource,
    store: &mut dyn TaskStore,
    config: &GeneratorConfig,
) -> Result<GenerationSummary, EngineError> {
    if catalog.is_empty() {
        return Err(EngineError::EmptyCatalog);
    }
    if staff.is_empty() {
        return Err(EngineError::EmptyRoster);
    }

    let eligible: Vec<Room> = rooms.iter().filter(|r| r.is_schedulable()).cloned().collect();
    let mut summary = GenerationSummary::default();

    for day_offset in 0..config.window_days {
        let date = config.start_date + Duration::days(day_offset as i64);

        let available: Vec<StaffMember> =
            staff.iter().filter(|s| s.works_on(date)).cloned().collect();
        if available.is_empty() {
            info!(%date, "no staff available, skipping day");
            summary.days_skipped_no_staff += 1;
            continue;
        }

        let batch = plan_day(catalog, &eligible, &available, date, occupancy, config, &mut summary)?;

        match store.upsert_batch(&batch) {
            Ok(written) => {
                summary.tasks_scheduled += written;
                summary.days_processed += 1;
            }
            Err(e) => {
                warn!(%date, error = %e, "failed to persist day batch");
                summary.warnings.push(format!("persistence failed for {date}: {e}"));
                summary.failed_days.push(date);
            }
        }
    }

    Ok(summary)
}

/// Compute one day's batch fully in memory. No I/O happens here, so a
/// persistence failure never leaves the day half-applied.
fn plan_day(
    catalog: &Catalog,
    rooms: &[Room],
    available: &[StaffMember],
    date: NaiveDate,
    occupancy: &mut dyn OccupancySource,
    config: &GeneratorConfig,
    summary: &mut GenerationSummary,
) -> Result<Vec<GeneratedTask>, EngineError> {
    let mut ledger = WorkloadLedger::new();
    let mut cursor = TimelineCursor::new();
    let distribution = distribute(rooms, available, &mut ledger);

    summary.over_capacity_assignments += distribution
        .assignments
        .iter()
        .filter(|a| a.outcome == AssignmentOutcome::AssignedOverCapacity)
        .count();
    summary.warnings.extend(distribution.warnings);

    let mut batch = Vec::new();
    for assignment in &distribution.assignments {
        let Some(member) = available.iter().find(|s| s.id == assignment.staff_id) else {
            continue;
        };
        let Some(schedule) = catalog.find_for_room_type(&assignment.room.room_type) else {
            continue;
        };

        for template in &schedule.tasks {
            if !should_fire(template, date, &assignment.room, occupancy) {
                continue;
            }

            let start = cursor.next_start(member, template.estimated_duration_minutes);
            let scheduled_time = local_to_utc(date, start, config.timezone)
                .map_err(|e| EngineError::Timezone(e.to_string()))?;

            match materialize(
                template,
                &assignment.room,
                member,
                date,
                scheduled_time,
                TaskSource::BulkSetup,
            ) {
                Ok(task) => batch.push(task),
                Err(e) => summary.warnings.push(format!(
                    "skipping {} for room {}: {e}",
                    template.task_type, assignment.room.number
                )),
            }
        }
    }

    Ok(batch)
}
