//! Record stores
//!
//! The whole collection is loaded and saved as one unit. `JsonFileStore`
//! persists it to the data file; `MemoryStore` keeps it in memory so services
//! can be exercised without touching the filesystem.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Record;

use super::file_io::{read_json, write_json_atomic};

/// Persistence for the full record collection
pub trait RecordStore {
    /// Load every record in insertion order; a missing document is empty
    fn load(&self) -> TrackerResult<Vec<Record>>;

    /// Replace the persisted document with `records`
    fn save(&self, records: &[Record]) -> TrackerResult<()>;
}

/// Store backed by a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> TrackerResult<Vec<Record>> {
        let records: Vec<Record> = read_json(&self.path)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> TrackerResult<()> {
        write_json_atomic(&self.path, records)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }
}

/// Store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
            fail_saves: false,
        }
    }

    /// A store whose saves always fail, for exercising write-failure paths
    pub fn failing() -> Self {
        Self::new().with_failing_saves()
    }

    /// Make every later save fail while keeping the current contents
    pub fn with_failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Snapshot of the current contents
    pub fn snapshot(&self) -> TrackerResult<Vec<Record>> {
        self.load()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> TrackerResult<Vec<Record>> {
        let records = self.records.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(records.clone())
    }

    fn save(&self, records: &[Record]) -> TrackerResult<()> {
        if self.fail_saves {
            return Err(TrackerError::Save("store is read-only".into()));
        }

        let mut data = self.records.write().map_err(|e| {
            TrackerError::Save(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = records.to_vec();
        Ok(())
    }
}
