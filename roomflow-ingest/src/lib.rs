//! roomflow-ingest: room and staff directory ingestion — CSV exports from
//! the property-management system and plain JSON files.

pub mod json;
pub mod parsers;

pub use json::{load_catalog, load_rooms, load_rules, load_staff};
pub use parsers::rooms_csv::parse_rooms_csv;
pub use parsers::staff_csv::{parse_staff_csv, parse_working_days};
