//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer.
//! Each service loads the record collection, works on it, and writes it back
//! through [`Storage`](crate::storage::Storage) when it changed.

pub mod budget;
pub mod expense;
pub mod summary;

pub use budget::{BudgetCheck, BudgetService};
pub use expense::{
    AddedExpense, ExpenseListing, ExpenseService, ExpenseUpdate, ListSelection, NewExpense,
    PendingExpense,
};
pub use summary::{Summary, SummaryFilter, SummaryScope, SummaryService};
