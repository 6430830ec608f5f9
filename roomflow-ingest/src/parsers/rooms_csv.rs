//! Parse room directory CSV exports into typed rooms.
//!
//! Expected columns after the header row (exports sometimes carry banner
//! rows above it):
//! id,number,type,status,property
//!
//! Unparseable rows are skipped rather than failing the whole file.

use anyhow::{Context, Result};
use std::path::Path;

use roomflow_core::{Room, RoomStatus};

fn parse_status(s: &str) -> Option<RoomStatus> {
    match s.trim().to_lowercase().as_str() {
        "available" => Some(RoomStatus::Available),
        "occupied" => Some(RoomStatus::Occupied),
        "cleaning" => Some(RoomStatus::Cleaning),
        "maintenance" => Some(RoomStatus::Maintenance),
        "out_of_order" => Some(RoomStatus::OutOfOrder),
        _ => None,
    }
}

/// Parse a room directory CSV, returning all valid rooms.
/// Skips leading banner rows and the header automatically.
pub fn parse_rooms_csv(path: impl AsRef<Path>) -> Result<Vec<Room>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut rooms = Vec::new();
    let mut header_found = false;

    for result in rdr.records() {
        let record = result?;
        // Skip until we find the header row
        if !header_found {
            if record.get(0).map(|s| s.trim().to_lowercase()) == Some("id".to_string()) {
                header_found = true;
            }
            continue;
        }

        let id = record.get(0).unwrap_or("").trim();
        if id.is_empty() {
            continue;
        }

        let status = match parse_status(record.get(3).unwrap_or("")) {
            Some(s) => s,
            None => continue, // skip rows with unknown status
        };

        let room = Room {
            id: id.to_string(),
            number: record.get(1).unwrap_or("").trim().to_string(),
            room_type: record.get(2).unwrap_or("").trim().to_lowercase(),
            status,
            property_id: record.get(4).unwrap_or("").trim().to_string(),
        };
        if room.validate().is_ok() {
            rooms.push(room);
        }
    }

    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_parses_rows_after_banner_and_header() {
        let f = write_csv(
            "Room directory export,,,,\n\
             ,,,,\n\
             id,number,type,status,property\n\
             r-101,101,standard,available,main\n\
             r-102,102,Suite,cleaning,main\n",
        );

        let rooms = parse_rooms_csv(f.path()).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].id, "r-101");
        assert_eq!(rooms[1].room_type, "suite");
        assert_eq!(rooms[1].status, RoomStatus::Cleaning);
    }

    #[test]
    fn test_skips_rows_with_unknown_status_or_missing_fields() {
        let f = write_csv(
            "id,number,type,status,property\n\
             r-101,101,standard,available,main\n\
             r-102,102,standard,definitely_haunted,main\n\
             ,,standard,available,main\n\
             r-104,,standard,available,main\n",
        );

        let rooms = parse_rooms_csv(f.path()).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, "r-101");
    }

    #[test]
    fn test_out_of_order_rooms_parse_but_are_not_schedulable() {
        let f = write_csv(
            "id,number,type,status,property\n\
             r-105,105,standard,out_of_order,main\n",
        );

        let rooms = parse_rooms_csv(f.path()).unwrap();
        assert_eq!(rooms.len(), 1);
        assert!(!rooms[0].is_schedulable());
    }
}
