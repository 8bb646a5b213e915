//! Append-only audit log
//!
//! One JSON object per line. Entries are flushed as they are written and read
//! back oldest first.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// Writes and reads the JSONL audit log beside the data file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, entry)?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(|e| TrackerError::Io(format!("Failed to write audit entry: {}", e)))
    }

    /// Every entry in the log, oldest first
    pub fn read_all(&self) -> TrackerResult<Vec<AuditEntry>> {
        self.read_recent(usize::MAX)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TrackerResult<Vec<AuditEntry>> {
        if count == 0 || !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut tail = VecDeque::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| TrackerError::Io(format!("Failed to read audit log: {}", e)))?;
            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                TrackerError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
            })?;

            if tail.len() == count {
                tail.pop_front();
            }
            tail.push_back(entry);
        }

        Ok(tail.into())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
