//! roomflow-core: domain types and scheduling primitives for the roomflow
//! engine — rooms, staff, template catalog, frequency evaluation,
//! assignment distribution, time slotting, task materialization, and
//! conflict detection.

pub mod conflict;
pub mod distribute;
pub mod frequency;
pub mod materialize;
pub mod room;
pub mod rules;
pub mod shift_clock;
pub mod staff;
pub mod task;
pub mod template;
pub mod time;

pub use conflict::{find_conflicts, ConflictGroup};
pub use distribute::{
    distribute, Assignment, AssignmentOutcome, DistributionResult, WorkloadLedger,
};
pub use frequency::{
    should_fire, FallbackProbabilities, OccupancySource, ProbabilisticOccupancy,
};
pub use materialize::{materialize, MaterializeError};
pub use room::{Room, RoomStatus};
pub use rules::{AssignmentRule, ScheduleRule};
pub use shift_clock::{
    default_start, shift_start, slot_start, slot_start_from, TimelineCursor, DEFAULT_SLOT_MINUTES,
};
pub use staff::{Shift, StaffMember, StaffRole};
pub use task::{ChecklistItem, GeneratedTask, TaskSource, TaskStatus};
pub use template::{
    Catalog, ChecklistTemplateItem, Frequency, ScheduleTemplate, TaskPriority, TaskTemplate,
    WILDCARD_ROOM_TYPE,
};
pub use time::{local_to_utc, parse_tz};
