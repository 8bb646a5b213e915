//! Display formatting for terminal output
//!
//! Turns service results into the lines the CLI prints. Nothing here touches
//! storage or writes to stdout directly.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_list, format_expense_row, NO_EXPENSES};
pub use summary::format_summary;
