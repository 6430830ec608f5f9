//! Bulk setup orchestrator: seed (or accept) a catalog, then run the
//! rolling-window generator. Always returns a summary, even under partial
//! failure; only configuration errors abort before persistence.

use roomflow_core::{Catalog, OccupancySource, Room, StaffMember};

use crate::defaults::default_catalog;
use crate::error::EngineError;
use crate::generator::{generate_window, GenerationSummary, GeneratorConfig};
use crate::store::TaskStore;

#[derive(Debug, Clone, Default)]
pub struct SetupSummary {
    pub templates_created: usize,
    pub schedules_created: usize,
    pub staff_created: usize,
    pub generation: GenerationSummary,
}

impl SetupSummary {
    pub fn summary(&self) -> String {
        format!(
            "setup: {} templates in {} schedules, {} staff; {}",
            self.templates_created,
            self.schedules_created,
            self.staff_created,
            self.generation.summary(),
        )
    }
}

pub fn run_setup(
    catalog: Option<Catalog>,
    rooms: &[Room],
    staff: &[StaffMember],
    occupancy: &mut dyn OccupancySource,
    store: &mut dyn TaskStore,
    config: &GeneratorConfig,
) -> Result<SetupSummary, EngineError> {
    let catalog = catalog.unwrap_or_else(default_catalog);

    let generation = generate_window(&catalog, rooms, staff, occupancy, store, config)?;

    Ok(SetupSummary {
        templates_created: catalog.total_templates(),
        schedules_created: catalog.schedules.len(),
        staff_created: staff.len(),
        generation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roomflow_core::{
        FallbackProbabilities, ProbabilisticOccupancy, Shift, StaffRole,
    };

    use crate::store::MemoryStore;

    #[test]
    fn test_setup_with_default_catalog_counts_templates() {
        let rooms = vec![Room::new("r1", "101", "standard")];
        let staff = vec![StaffMember::new("s1", "Ana", StaffRole::Housekeeper, Shift::Morning)];
        let mut occupancy = ProbabilisticOccupancy::seeded(1, FallbackProbabilities::default());
        let mut store = MemoryStore::new();
        // 2026-08-24 is a Monday.
        let config = GeneratorConfig::new(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());

        let summary =
            run_setup(None, &rooms, &staff, &mut occupancy, &mut store, &config).unwrap();

        assert_eq!(summary.schedules_created, 4);
        assert!(summary.templates_created >= 8);
        assert_eq!(summary.staff_created, 1);
        // Daily cleaning fires every working day regardless of occupancy.
        assert!(summary.generation.tasks_scheduled > 0);
    }

    #[test]
    fn test_empty_roster_is_fatal_before_persistence() {
        let rooms = vec![Room::new("r1", "101", "standard")];
        let mut occupancy = ProbabilisticOccupancy::seeded(1, FallbackProbabilities::default());
        let mut store = MemoryStore::new();
        let config = GeneratorConfig::new(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());

        let err = run_setup(None, &rooms, &[], &mut occupancy, &mut store, &config).unwrap_err();
        assert!(matches!(err, EngineError::EmptyRoster));
        assert!(store.is_empty());
    }
}
