//! Audit entry data structures

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Expense;

use super::diff::generate_diff;

/// Kind of change recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        })
    }
}

/// Kind of record a change applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Budget,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityType::Expense => "Expense",
            EntityType::Budget => "Budget",
        })
    }
}

/// The record an audit entry is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub entity_type: EntityType,
    pub id: String,
    pub name: Option<String>,
}

impl Subject {
    /// An expense, identified by id and labelled with its description
    pub fn expense(expense: &Expense) -> Self {
        Self {
            entity_type: EntityType::Expense,
            id: expense.id.to_string(),
            name: Some(expense.description.clone()),
        }
    }

    /// A budget entry, identified by its 1-based position in the collection
    pub fn budget(position: usize) -> Self {
        Self {
            entity_type: EntityType::Budget,
            id: position.to_string(),
            name: None,
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was made (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    pub entity_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Serialized record before the change (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    /// Serialized record after the change (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Build an entry stamped with the current time
    ///
    /// The diff summary is filled in whenever both sides are present.
    pub fn new<T: Serialize>(
        operation: Operation,
        subject: Subject,
        before: Option<&T>,
        after: Option<&T>,
    ) -> Self {
        let before = before.and_then(|v| serde_json::to_value(v).ok());
        let after = after.and_then(|v| serde_json::to_value(v).ok());
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation,
            entity_type: subject.entity_type,
            entity_id: subject.id,
            entity_name: subject.name,
            before,
            after,
            diff_summary,
        }
    }
}

/// `[2024-05-01 08:00:00 UTC] UPDATE Expense 3 (lunch): amount: 9.0 -> 12.0`
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        )?;
        if let Some(name) = &self.entity_name {
            write!(f, " ({})", name)?;
        }
        if let Some(diff) = &self.diff_summary {
            write!(f, ": {}", diff)?;
        }
        Ok(())
    }
}
