//! Assignment distributor: map a day's rooms onto available staff.
//!
//! Round-robin seed, two skill-override rules, then a linear capacity
//! fallback. First match wins throughout; there is no load balancing among
//! equally-skilled staff beyond the round-robin seed (kept as-is, see
//! DESIGN.md).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::room::Room;
use crate::staff::StaffMember;

/// Room types routed to staff with advanced/kitchen cleaning skills.
pub const SUITE_ROOM_TYPES: [&str; 2] = ["suite", "family"];
pub const SUITE_SKILLS: [&str; 2] = ["advanced_cleaning", "kitchen_cleaning"];
pub const ACCESSIBLE_SKILLS: [&str; 2] = ["accessibility_cleaning", "ada_compliance"];

/// How an assignment was made. Over-capacity assignments are explicit, not
/// silent: under-scheduling a room is worse than an imbalanced day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentOutcome {
    Assigned,
    AssignedOverCapacity,
    Unassigned,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub room: Room,
    pub staff_id: String,
    /// 1-based position within this staff member's day.
    pub ordinal: u32,
    pub outcome: AssignmentOutcome,
}

/// Per-staff running room counts for one day's distribution pass.
///
/// Deliberately an explicit value passed into `distribute` rather than
/// module state; its lifetime is one day's call.
#[derive(Debug, Default)]
pub struct WorkloadLedger {
    counts: HashMap<String, u32>,
}

impl WorkloadLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, staff_id: &str) -> u32 {
        self.counts.get(staff_id).copied().unwrap_or(0)
    }

    /// Increment and return the new count, which is the task's ordinal.
    pub fn record(&mut self, staff_id: &str) -> u32 {
        let n = self.counts.entry(staff_id.to_string()).or_insert(0);
        *n += 1;
        *n
    }
}

#[derive(Debug, Default)]
pub struct DistributionResult {
    pub assignments: Vec<Assignment>,
    pub warnings: Vec<String>,
}

/// Assign each room to a staff member.
///
/// Rooms are processed in input order. The candidate is the round-robin
/// index, overridden by skill rules: suites/family rooms go to the first
/// staff member with an advanced-cleaning skill, accessible rooms to the
/// first with an accessibility skill. A saturated candidate is replaced by
/// the first staff member with remaining capacity; when nobody has capacity
/// the room is still assigned to the original candidate, tagged
/// `AssignedOverCapacity`.
pub fn distribute(
    rooms: &[Room],
    staff: &[StaffMember],
    ledger: &mut WorkloadLedger,
) -> DistributionResult {
    let mut result = DistributionResult::default();

    if staff.is_empty() {
        for room in rooms {
            result.assignments.push(Assignment {
                room: room.clone(),
                staff_id: String::new(),
                ordinal: 0,
                outcome: AssignmentOutcome::Unassigned,
            });
        }
        if !rooms.is_empty() {
            result
                .warnings
                .push(format!("{} rooms left unassigned: empty staff list", rooms.len()));
        }
        return result;
    }

    for (i, room) in rooms.iter().enumerate() {
        let mut chosen = i % staff.len();

        if SUITE_ROOM_TYPES.contains(&room.room_type.as_str()) {
            if let Some(j) = staff.iter().position(|s| s.has_any_skill(&SUITE_SKILLS)) {
                chosen = j;
            }
        } else if room.room_type == "accessible" {
            if let Some(j) = staff.iter().position(|s| s.has_any_skill(&ACCESSIBLE_SKILLS)) {
                chosen = j;
            }
        }

        let mut outcome = AssignmentOutcome::Assigned;
        if ledger.count(&staff[chosen].id) >= staff[chosen].max_rooms_per_day {
            match staff
                .iter()
                .position(|s| ledger.count(&s.id) < s.max_rooms_per_day)
            {
                Some(j) => chosen = j,
                None => {
                    outcome = AssignmentOutcome::AssignedOverCapacity;
                    warn!(
                        room = %room.number,
                        staff = %staff[chosen].name,
                        "all staff at capacity, assigning over capacity"
                    );
                    result.warnings.push(format!(
                        "room {} assigned to {} over capacity",
                        room.number, staff[chosen].name
                    ));
                }
            }
        }

        let ordinal = ledger.record(&staff[chosen].id);
        result.assignments.push(Assignment {
            room: room.clone(),
            staff_id: staff[chosen].id.clone(),
            ordinal,
            outcome,
        });
    }

    result
}
