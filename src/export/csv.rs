//! CSV export
//!
//! Writes every persisted record, budget entries included, as one CSV row.
//! The header is the union of the record keys in the order they are first
//! seen, so budget rows leave the expense columns empty and vice versa.

use std::io::Write;

use serde_json::{Map, Value};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Record;
use crate::storage::Storage;

/// Export the full record collection; returns the number of data rows
pub fn export_csv<W: Write>(storage: &Storage, writer: W) -> TrackerResult<usize> {
    let records = storage.load()?;
    write_records_csv(&records, writer)
}

/// Write `records` as CSV; returns the number of data rows
pub fn write_records_csv<W: Write>(records: &[Record], mut writer: W) -> TrackerResult<usize> {
    let rows = records
        .iter()
        .map(record_fields)
        .collect::<TrackerResult<Vec<_>>>()?;

    let header = union_of_keys(&rows);
    if header.is_empty() {
        // Nothing to describe: emit a lone empty header line
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        return Ok(0);
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&header)?;
    for row in &rows {
        wtr.write_record(header.iter().map(|key| row.get(key).map(cell).unwrap_or_default()))?;
    }
    wtr.flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(rows.len())
}

fn record_fields(record: &Record) -> TrackerResult<Map<String, Value>> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        other => Err(TrackerError::Export(format!(
            "record did not serialize to an object: {}",
            other
        ))),
    }
}

fn union_of_keys(rows: &[Map<String, Value>]) -> Vec<String> {
    let mut header: Vec<String> = Vec::new();
    for key in rows.iter().flat_map(|row| row.keys()) {
        if !header.contains(key) {
            header.push(key.clone());
        }
    }
    header
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetEntry, Expense, ExpenseId, Money};
    use chrono::NaiveDate;

    fn export(records: &[Record]) -> String {
        let mut out = Vec::new();
        write_records_csv(records, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn expense(id: u64, description: &str, units: i64) -> Expense {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Expense::with_timestamp(ExpenseId::new(id), description, Money::from_units(units), at)
    }

    #[test]
    fn test_empty_collection_is_header_only() {
        assert_eq!(export(&[]), "\n");
    }

    #[test]
    fn test_expenses_only() {
        let csv = export(&[expense(1, "coffee", 3).into()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "id,description,amount,timestamp");
        assert_eq!(lines[1], "1,coffee,3.0,2024-05-01T08:00:00");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_mixed_records_leave_gaps() {
        let records: Vec<Record> = vec![
            BudgetEntry::new(Money::from_units(100)).into(),
            expense(2, "rent, march", 90).into(),
        ];
        let csv = export(&records);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "budget,id,description,amount,timestamp");
        assert_eq!(lines[1], "100.0,,,,");
        assert_eq!(lines[2], ",2,\"rent, march\",90.0,2024-05-01T08:00:00");
    }

    #[test]
    fn test_category_column_appears_when_used() {
        let records: Vec<Record> = vec![
            expense(1, "bus", 2).into(),
            expense(2, "lunch", 9).categorized(Some("food".into())).into(),
        ];
        let csv = export(&records);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "id,description,amount,timestamp,category");
        assert!(lines[1].ends_with(','));
        assert!(lines[2].ends_with(",food"));
    }

    #[test]
    fn test_export_from_storage_counts_rows() {
        let storage = Storage::in_memory();
        storage
            .save(&[
                BudgetEntry::new(Money::from_units(5)).into(),
                expense(2, "tea", 1).into(),
            ])
            .unwrap();

        let mut out = Vec::new();
        assert_eq!(export_csv(&storage, &mut out).unwrap(), 2);
    }
}
