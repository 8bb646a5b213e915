//! Budget service
//!
//! Records budget entries and answers whether a new expense would go over the
//! budget. Entries are only ever appended; the first one in the collection is
//! the one that counts.

use crate::audit::{Operation, Subject};
use crate::error::TrackerResult;
use crate::models::record::{expense_total, first_budget};
use crate::models::{BudgetEntry, Money, Record};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// Outcome of comparing spending against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetCheck {
    /// The budget in effect
    pub budget: Money,
    /// Total spending including the expense being checked
    pub projected_total: Money,
}

impl BudgetCheck {
    /// Compare `existing + amount` against the first budget, if there is one
    pub fn against(records: &[Record], amount: Money) -> Option<Self> {
        first_budget(records).map(|budget| Self {
            budget,
            projected_total: expense_total(records) + amount,
        })
    }

    pub fn exceeded(&self) -> bool {
        self.projected_total > self.budget
    }

    /// How far over (positive) or under (negative) the budget
    pub fn overrun(&self) -> Money {
        self.projected_total - self.budget
    }
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append a new budget entry
    ///
    /// Earlier entries are kept and the first one stays authoritative.
    pub fn set_budget(&self, amount: Money) -> TrackerResult<BudgetEntry> {
        let mut records = self.storage.load()?;

        if let Some(existing) = first_budget(&records) {
            tracing::warn!(
                %existing,
                requested = %amount,
                "a budget is already recorded; the earliest entry stays in effect"
            );
        }

        let entry = BudgetEntry::new(amount);
        records.push(entry.into());
        self.storage.save(&records)?;

        self.storage.record_change(
            Operation::Create,
            Subject::budget(records.len()),
            None,
            Some(&entry),
        );
        tracing::info!(budget = %amount, "budget recorded");

        Ok(entry)
    }

    /// The budget in effect, if any
    pub fn current_budget(&self) -> TrackerResult<Option<Money>> {
        Ok(first_budget(&self.storage.load()?))
    }
}
