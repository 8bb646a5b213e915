//! Audit logging for the expense tracker
//!
//! Records every create, update and delete with before/after values in an
//! append-only audit log next to the data file.
//!
//! - `AuditEntry`: one log entry with timestamp, operation, the `Subject` it
//!   applies to, and optional before/after values.
//! - `AuditLogger`: appends entries to the log in line-delimited JSON (JSONL)
//!   and reads them back for `history`.
//! - `generate_diff`: human-readable summary of what an update changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation, Subject};
pub use logger::AuditLogger;
