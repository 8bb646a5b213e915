//! Expense service
//!
//! Provides business logic for expense management: add with the advisory
//! budget check, update, delete and list.

use std::collections::BTreeSet;

use crate::audit::{Operation, Subject};
use crate::error::{TrackerError, TrackerResult};
use crate::models::record::{expenses, next_expense_id, position_of};
use crate::models::{Expense, ExpenseId, Money, Record};
use crate::storage::Storage;

use super::budget::BudgetCheck;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub category: Option<String>,
}

impl NewExpense {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            description: description.into(),
            amount,
            category: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Input for updating an expense
///
/// Description and amount are always replaced; the category only when given.
#[derive(Debug, Clone)]
pub struct ExpenseUpdate {
    pub description: String,
    pub amount: Money,
    pub category: Option<String>,
}

/// Result of adding an expense
#[derive(Debug, Clone)]
pub struct AddedExpense {
    pub expense: Expense,
    /// Budget comparison, present when a budget is recorded
    pub budget: Option<BudgetCheck>,
}

impl AddedExpense {
    pub fn exceeds_budget(&self) -> bool {
        self.budget.is_some_and(|check| check.exceeded())
    }
}

/// An expense built from the current collection but not yet saved
#[derive(Debug, Clone)]
pub struct PendingExpense {
    records: Vec<Record>,
    pub expense: Expense,
    pub budget: Option<BudgetCheck>,
}

impl PendingExpense {
    pub fn exceeds_budget(&self) -> bool {
        self.budget.is_some_and(|check| check.exceeded())
    }
}

/// Which expenses `list` should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSelection {
    All,
    Ids(BTreeSet<ExpenseId>),
    /// No filter given; nothing is selected
    Unfiltered,
}

impl ListSelection {
    /// Build a selection from the `--all` / `--ids` flags, `--all` taking priority
    pub fn from_flags(all: bool, ids: Option<Vec<ExpenseId>>) -> Self {
        match ids {
            _ if all => Self::All,
            Some(ids) if !ids.is_empty() => Self::Ids(ids.into_iter().collect()),
            _ => Self::Unfiltered,
        }
    }

    fn includes(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Ids(ids) => ids.contains(&expense.id),
            Self::Unfiltered => false,
        }
    }
}

/// Result of a `list` query
#[derive(Debug, Clone, Default)]
pub struct ExpenseListing {
    /// Selected expenses in insertion order
    pub expenses: Vec<Expense>,
    /// How many expenses the store holds in total
    pub stored: usize,
}

impl ExpenseListing {
    /// True when the store has expenses but the selection matched none
    pub fn nothing_matched(&self) -> bool {
        self.expenses.is_empty() && self.stored > 0
    }
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an expense
    ///
    /// Going over the budget is reported in the result but never blocks the add.
    pub fn add(&self, input: NewExpense) -> TrackerResult<AddedExpense> {
        let pending = self.prepare(input)?;
        self.commit(pending)
    }

    /// Build the next expense and compare it against the budget without saving
    pub fn prepare(&self, input: NewExpense) -> TrackerResult<PendingExpense> {
        let records = self.storage.load()?;

        let budget = BudgetCheck::against(&records, input.amount);
        if let Some(check) = budget.filter(BudgetCheck::exceeded) {
            tracing::warn!(
                budget = %check.budget,
                projected = %check.projected_total,
                "expense exceeds budget"
            );
        }

        let expense = Expense::new(next_expense_id(&records), input.description, input.amount)
            .categorized(input.category);

        Ok(PendingExpense {
            records,
            expense,
            budget,
        })
    }

    /// Persist a prepared expense
    pub fn commit(&self, pending: PendingExpense) -> TrackerResult<AddedExpense> {
        let PendingExpense {
            mut records,
            expense,
            budget,
        } = pending;

        records.push(expense.clone().into());
        self.storage.save(&records)?;

        self.storage
            .record_change(Operation::Create, Subject::expense(&expense), None, Some(&expense));
        tracing::info!(id = %expense.id, amount = %expense.amount, "expense added");

        Ok(AddedExpense { expense, budget })
    }

    /// Update the first expense with the given id
    ///
    /// No budget check is made on update.
    pub fn update(&self, id: ExpenseId, changes: ExpenseUpdate) -> TrackerResult<Expense> {
        let mut records = self.storage.load()?;
        let index = position_of(&records, id).ok_or_else(|| TrackerError::expense_not_found(id))?;

        let Record::Expense(expense) = &mut records[index] else {
            return Err(TrackerError::expense_not_found(id));
        };

        let before = expense.clone();
        expense.revise(changes.description, changes.amount);
        if changes.category.is_some() {
            expense.category = changes.category;
        }
        let after = expense.clone();

        self.storage.save(&records)?;

        self.storage.record_change(
            Operation::Update,
            Subject::expense(&after),
            Some(&before),
            Some(&after),
        );
        tracing::info!(%id, "expense updated");

        Ok(after)
    }

    /// Delete the first expense with the given id
    pub fn delete(&self, id: ExpenseId) -> TrackerResult<Expense> {
        let mut records = self.storage.load()?;
        let index = position_of(&records, id).ok_or_else(|| TrackerError::expense_not_found(id))?;

        let Record::Expense(removed) = records.remove(index) else {
            return Err(TrackerError::expense_not_found(id));
        };

        self.storage.save(&records)?;

        self.storage
            .record_change(Operation::Delete, Subject::expense(&removed), Some(&removed), None);
        tracing::info!(%id, "expense deleted");

        Ok(removed)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        let records = self.storage.load()?;
        let found = expenses(&records).find(|e| e.id == id).cloned();
        Ok(found)
    }

    /// List expenses in insertion order
    pub fn list(&self, selection: &ListSelection) -> TrackerResult<ExpenseListing> {
        let records = self.storage.load()?;

        let mut listing = ExpenseListing::default();
        for expense in expenses(&records) {
            listing.stored += 1;
            if selection.includes(expense) {
                listing.expenses.push(expense.clone());
            }
        }

        Ok(listing)
    }
}
