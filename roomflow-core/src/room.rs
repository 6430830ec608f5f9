//! Room directory records.
//!
//! Rooms are owned by the property-management side; the scheduler only reads
//! them. The shape here is the input contract: `{id, number, room_type,
//! status, property_id}`.

use serde::{Deserialize, Serialize};

/// Operational status of a room as reported by the room directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
    OutOfOrder,
}

impl RoomStatus {
    /// Out-of-order rooms never receive scheduled work.
    pub fn is_schedulable(self) -> bool {
        !matches!(self, RoomStatus::OutOfOrder)
    }
}

/// A room eligible for task generation (read-only to this engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Door number as printed on the key card, e.g. "204".
    pub number: String,
    /// Category used for template matching: "standard", "suite", "accessible", ...
    pub room_type: String,
    pub status: RoomStatus,
    pub property_id: String,
}

impl Room {
    pub fn new(
        id: impl Into<String>,
        number: impl Into<String>,
        room_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            room_type: room_type.into(),
            status: RoomStatus::Available,
            property_id: String::new(),
        }
    }

    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_property(mut self, property_id: impl Into<String>) -> Self {
        self.property_id = property_id.into();
        self
    }

    /// Minimal invariants for safe downstream processing.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("room id must be non-empty".to_string());
        }
        if self.number.trim().is_empty() {
            return Err("room number must be non-empty".to_string());
        }
        if self.room_type.trim().is_empty() {
            return Err("room type must be non-empty".to_string());
        }
        Ok(())
    }

    pub fn is_schedulable(&self) -> bool {
        self.status.is_schedulable()
    }
}
