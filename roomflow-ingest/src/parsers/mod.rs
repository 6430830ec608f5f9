pub mod rooms_csv;
pub mod staff_csv;
