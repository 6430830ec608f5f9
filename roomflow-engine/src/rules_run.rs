//! Steady-state rule runner: evaluate recurring schedule rules for one date
//! and materialize tasks through the shared distributor and materializer.
//!
//! Unlike the bulk path, rules have no per-template duration context for
//! slotting; tasks queue at `base_time + (ordinal - 1) * slot` per staff
//! member.

use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::{info, warn};

use roomflow_core::{
    distribute, local_to_utc, materialize, should_fire, slot_start_from, AssignmentRule,
    OccupancySource, Room, ScheduleRule, StaffMember, StaffRole, TaskSource, WorkloadLedger,
    DEFAULT_SLOT_MINUTES,
};

use crate::error::EngineError;
use crate::store::TaskStore;

#[derive(Debug, Clone)]
pub struct RuleRunConfig {
    pub date: NaiveDate,
    pub timezone: Tz,
    pub slot_minutes: i64,
}

impl RuleRunConfig {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            timezone: chrono_tz::UTC,
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleRunSummary {
    pub scheduled_count: usize,
    pub rules_due: usize,
    pub warnings: Vec<String>,
}

impl RuleRunSummary {
    pub fn summary(&self) -> String {
        format!(
            "rules: {} due, {} tasks scheduled, {} warnings",
            self.rules_due,
            self.scheduled_count,
            self.warnings.len()
        )
    }
}

/// Order/filter the available roster per the rule's assignment strategy.
/// Skill-based and round-robin both rely on the distributor's own candidate
/// logic; the strategies here only shape the roster it sees.
fn staff_for_strategy(
    strategy: AssignmentRule,
    available: &[StaffMember],
    warnings: &mut Vec<String>,
) -> Vec<StaffMember> {
    match strategy {
        AssignmentRule::RoundRobin | AssignmentRule::SkillBased => available.to_vec(),
        AssignmentRule::MaintenanceStaff => {
            let maintenance: Vec<StaffMember> = available
                .iter()
                .filter(|s| s.role == StaffRole::Maintenance)
                .cloned()
                .collect();
            if maintenance.is_empty() {
                warnings.push(
                    "no maintenance staff available, falling back to full roster".to_string(),
                );
                available.to_vec()
            } else {
                maintenance
            }
        }
        AssignmentRule::ExperiencedStaff => {
            let mut ordered = available.to_vec();
            // Stable sort keeps roster order among equally-skilled staff.
            ordered.sort_by(|a, b| b.skills.len().cmp(&a.skills.len()));
            ordered
        }
    }
}

/// Run all due rules for `config.date`. The day is skipped (not an error)
/// when nobody works it.
pub fn run_rules(
    rules: &[ScheduleRule],
    rooms: &[Room],
    staff: &[StaffMember],
    occupancy: &mut dyn OccupancySource,
    store: &mut dyn TaskStore,
    config: &RuleRunConfig,
) -> Result<RuleRunSummary, EngineError> {
    let mut summary = RuleRunSummary::default();

    let available: Vec<StaffMember> = staff
        .iter()
        .filter(|s| s.works_on(config.date))
        .cloned()
        .collect();
    if available.is_empty() {
        info!(date = %config.date, "no staff available, skipping rule run");
        return Ok(summary);
    }

    for rule in rules.iter().filter(|r| r.is_due(config.date)) {
        summary.rules_due += 1;

        let candidates = staff_for_strategy(rule.assignment_rule, &available, &mut summary.warnings);
        let rule_rooms: Vec<Room> = rooms
            .iter()
            .filter(|r| r.is_schedulable() && rule.applies_to(&r.room_type))
            .cloned()
            .collect();
        if rule_rooms.is_empty() {
            continue;
        }

        let mut ledger = WorkloadLedger::new();
        let distribution = distribute(&rule_rooms, &candidates, &mut ledger);
        summary.warnings.extend(distribution.warnings);

        let template = rule.to_template();
        let mut batch = Vec::new();

        for assignment in &distribution.assignments {
            let Some(member) = candidates.iter().find(|s| s.id == assignment.staff_id) else {
                continue;
            };
            if !should_fire(&template, config.date, &assignment.room, occupancy) {
                continue;
            }

            let start = slot_start_from(rule.base_time(), assignment.ordinal, config.slot_minutes);
            let scheduled_time = local_to_utc(config.date, start, config.timezone)
                .map_err(|e| EngineError::Timezone(e.to_string()))?;

            match materialize(
                &template,
                &assignment.room,
                member,
                config.date,
                scheduled_time,
                TaskSource::RecurringRule,
            ) {
                Ok(task) => batch.push(task),
                Err(e) => summary.warnings.push(format!(
                    "rule {}: skipping room {}: {e}",
                    rule.name, assignment.room.number
                )),
            }
        }

        match store.upsert_batch(&batch) {
            Ok(written) => summary.scheduled_count += written,
            Err(e) => {
                warn!(rule = %rule.name, error = %e, "failed to persist rule batch");
                summary
                    .warnings
                    .push(format!("persistence failed for rule {}: {e}", rule.name));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Timelike};
    use roomflow_core::{
        FallbackProbabilities, Frequency, ProbabilisticOccupancy, Shift, TaskStatus,
    };

    use crate::store::MemoryStore;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    fn roster() -> Vec<StaffMember> {
        vec![
            StaffMember::new("hk1", "Ana", StaffRole::Housekeeper, Shift::Morning)
                .with_skill("advanced_cleaning"),
            StaffMember::new("mt1", "Ben", StaffRole::Maintenance, Shift::Morning)
                .with_skill("hvac")
                .with_skill("plumbing")
                .with_skill("electrical"),
        ]
    }

    fn occupancy() -> ProbabilisticOccupancy {
        ProbabilisticOccupancy::seeded(1, FallbackProbabilities::default())
    }

    #[test]
    fn test_daily_rule_schedules_slotted_tasks() {
        let rule = ScheduleRule::new("rule-1", "Morning tidy", "daily_cleaning", Frequency::Daily)
            .at(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        let rooms = vec![
            Room::new("r1", "101", "standard"),
            Room::new("r2", "102", "standard"),
            Room::new("r3", "103", "standard"),
        ];

        let mut store = MemoryStore::new();
        let summary = run_rules(
            &[rule],
            &rooms,
            &roster(),
            &mut occupancy(),
            &mut store,
            &RuleRunConfig::new(monday()),
        )
        .unwrap();

        assert_eq!(summary.rules_due, 1);
        assert_eq!(summary.scheduled_count, 3);

        let tasks = store.all().unwrap();
        assert!(tasks.iter().all(|t| t.status == TaskStatus::Scheduled));
        // Round-robin: Ana gets rooms 101+103 at 10:00 and 10:45, Ben 102 at 10:00.
        let ana_minutes: Vec<u32> = tasks
            .iter()
            .filter(|t| t.assigned_to == "hk1")
            .map(|t| t.scheduled_time.minute() + 60 * t.scheduled_time.hour())
            .collect();
        assert_eq!(ana_minutes.len(), 2);
        assert_eq!((ana_minutes[1] as i64 - ana_minutes[0] as i64).abs(), 45);
    }

    #[test]
    fn test_maintenance_strategy_filters_roster() {
        let rule = ScheduleRule::new("rule-2", "Filter check", "hvac_filter_check", Frequency::Daily)
            .with_assignment(AssignmentRule::MaintenanceStaff);
        let rooms = vec![Room::new("r1", "101", "standard")];

        let mut store = MemoryStore::new();
        run_rules(
            &[rule],
            &rooms,
            &roster(),
            &mut occupancy(),
            &mut store,
            &RuleRunConfig::new(monday()),
        )
        .unwrap();

        let tasks = store.all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].assigned_to, "mt1");
        assert_eq!(tasks[0].source, roomflow_core::TaskSource::RecurringRule);
    }

    #[test]
    fn test_maintenance_strategy_falls_back_with_warning() {
        let rule = ScheduleRule::new("rule-3", "Filter check", "hvac_filter_check", Frequency::Daily)
            .with_assignment(AssignmentRule::MaintenanceStaff);
        let housekeepers_only =
            vec![StaffMember::new("hk1", "Ana", StaffRole::Housekeeper, Shift::Morning)];
        let rooms = vec![Room::new("r1", "101", "standard")];

        let mut store = MemoryStore::new();
        let summary = run_rules(
            &[rule],
            &rooms,
            &housekeepers_only,
            &mut occupancy(),
            &mut store,
            &RuleRunConfig::new(monday()),
        )
        .unwrap();

        assert_eq!(summary.scheduled_count, 1);
        assert!(summary.warnings.iter().any(|w| w.contains("no maintenance staff")));
    }

    #[test]
    fn test_experienced_strategy_prefers_most_skilled() {
        let rule = ScheduleRule::new("rule-4", "Inspection", "inspection", Frequency::Daily)
            .with_assignment(AssignmentRule::ExperiencedStaff);
        let rooms = vec![Room::new("r1", "101", "standard")];

        let mut store = MemoryStore::new();
        run_rules(
            &[rule],
            &rooms,
            &roster(),
            &mut occupancy(),
            &mut store,
            &RuleRunConfig::new(monday()),
        )
        .unwrap();

        // Ben has three skills to Ana's one, so he heads the rotation.
        let tasks = store.all().unwrap();
        assert_eq!(tasks[0].assigned_to, "mt1");
    }

    #[test]
    fn test_nobody_working_means_clean_skip() {
        let rule = ScheduleRule::new("rule-5", "Tidy", "daily_cleaning", Frequency::Daily);
        let sunday_off = vec![StaffMember::new("hk1", "Ana", StaffRole::Housekeeper, Shift::Morning)];
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let rooms = vec![Room::new("r1", "101", "standard")];

        let mut store = MemoryStore::new();
        let summary = run_rules(
            &[rule],
            &rooms,
            &sunday_off,
            &mut occupancy(),
            &mut store,
            &RuleRunConfig::new(sunday),
        )
        .unwrap();

        assert_eq!(summary.scheduled_count, 0);
        assert_eq!(summary.rules_due, 0);
        assert!(store.is_empty());
    }
}
