//! Core data models for the expense tracker
//!
//! This module contains the data structures persisted in the data file:
//! expenses, budget entries, and the record union that holds both.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;
pub mod record;

pub use budget::BudgetEntry;
pub use expense::{Expense, TIMESTAMP_FORMAT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use record::Record;
