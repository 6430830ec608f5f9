//! JSON loaders for rooms, staff, schedule rules, and the template catalog.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use roomflow_core::{Catalog, Room, ScheduleRule, StaffMember};

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {what} from {}", path.display()))
}

pub fn load_rooms(path: impl AsRef<Path>) -> Result<Vec<Room>> {
    load_json(path.as_ref(), "rooms")
}

pub fn load_staff(path: impl AsRef<Path>) -> Result<Vec<StaffMember>> {
    load_json(path.as_ref(), "staff")
}

pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<ScheduleRule>> {
    load_json(path.as_ref(), "schedule rules")
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    load_json(path.as_ref(), "template catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomflow_core::RoomStatus;
    use std::io::Write;

    #[test]
    fn test_loads_rooms_from_json() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            br#"[
                {"id":"r-101","number":"101","room_type":"standard","status":"available","property_id":"main"},
                {"id":"r-102","number":"102","room_type":"suite","status":"out_of_order","property_id":"main"}
            ]"#,
        )
        .unwrap();

        let rooms = load_rooms(f.path()).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[1].status, RoomStatus::OutOfOrder);
    }

    #[test]
    fn test_missing_file_errors_with_path() {
        let err = load_staff("/nonexistent/staff.json").unwrap_err();
        assert!(err.to_string().contains("staff.json"));
    }

    #[test]
    fn test_catalog_roundtrip() {
        use roomflow_core::{Frequency, ScheduleTemplate, TaskTemplate};

        let catalog = Catalog::new(vec![ScheduleTemplate::new("Standard", "base program")
            .with_room_type("standard")
            .with_task(TaskTemplate::new("daily_cleaning", Frequency::Daily))]);

        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(serde_json::to_string_pretty(&catalog).unwrap().as_bytes())
            .unwrap();

        let back = load_catalog(f.path()).unwrap();
        assert_eq!(back, catalog);
    }
}
