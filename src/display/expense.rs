//! Expense display formatting

use crate::models::Expense;
use crate::services::ExpenseListing;

/// Message printed when a list selection matches nothing
pub const NO_EXPENSES: &str = "No expenses found";

/// Format a single expense as `id: description - amount - timestamp`
pub fn format_expense_row(expense: &Expense, currency_symbol: &str) -> String {
    let mut row = format!(
        "{}: {} - {} - {}",
        expense.id,
        expense.description,
        expense.amount.format_with_symbol(currency_symbol),
        expense.timestamp_iso()
    );
    if let Some(category) = &expense.category {
        row.push_str(&format!(" [{}]", category));
    }
    row
}

/// Format the result of `list`, one line per expense
///
/// An empty store prints nothing at all; a non-empty store whose selection
/// matched nothing prints [`NO_EXPENSES`] once.
pub fn format_expense_list(listing: &ExpenseListing, currency_symbol: &str) -> String {
    if listing.nothing_matched() {
        return format!("{}\n", NO_EXPENSES);
    }

    listing
        .expenses
        .iter()
        .map(|e| format_expense_row(e, currency_symbol) + "\n")
        .collect()
}
