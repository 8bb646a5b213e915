//! Storage layer for the expense tracker
//!
//! Provides the record store abstraction, JSON file storage with atomic
//! writes, and the audit hooks every mutating service goes through.

pub mod file_io;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use records::{JsonFileStore, MemoryStore, RecordStore};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, Operation, Subject};
use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::models::Record;

/// Main storage coordinator: one record store plus the optional audit log
pub struct Storage {
    records: Box<dyn RecordStore>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create storage over any record store, without auditing
    pub fn new(records: impl RecordStore + 'static) -> Self {
        Self {
            records: Box::new(records),
            audit: None,
        }
    }

    /// Open the on-disk data file described by `paths`
    pub fn open(paths: &TrackerPaths, settings: &Settings) -> Self {
        let storage = Self::new(JsonFileStore::new(paths.data_file()));
        if settings.audit_log {
            storage.with_audit(AuditLogger::new(paths.audit_log()))
        } else {
            storage
        }
    }

    /// Storage held in memory
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load the full record collection
    pub fn load(&self) -> TrackerResult<Vec<Record>> {
        self.records.load()
    }

    /// Persist the full record collection
    pub fn save(&self, records: &[Record]) -> TrackerResult<()> {
        self.records.save(records)
    }

    /// Append a change to the audit log, if auditing is enabled
    pub fn record_change<T: Serialize>(
        &self,
        operation: Operation,
        subject: Subject,
        before: Option<&T>,
        after: Option<&T>,
    ) {
        self.write_audit(|| AuditEntry::new(operation, subject, before, after));
    }

    // The data file is already saved by the time we get here, so a broken
    // audit log must not turn a successful command into a failed one.
    fn write_audit(&self, entry: impl FnOnce() -> AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };

        let entry = entry();
        if let Err(e) = logger.log(&entry) {
            tracing::warn!(
                path = %logger.path().display(),
                error = %e,
                "failed to append audit entry"
            );
        }
    }
}
