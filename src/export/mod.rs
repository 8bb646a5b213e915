//! Export module for the expense tracker
//!
//! Writes the persisted record collection to a spreadsheet-compatible CSV file.

pub mod csv;

pub use self::csv::{export_csv, write_records_csv};
