//! Expense CLI commands
//!
//! Implements `add`, `update`, `delete` and `list`.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::TrackerResult;
use crate::models::{ExpenseId, Money};
use crate::services::{ExpenseService, ExpenseUpdate, ListSelection, NewExpense};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub description: String,
    /// Amount spent (e.g., "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: Money,
    /// Optional category label
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Expense ID
    pub id: ExpenseId,
    /// New description
    pub description: String,
    /// New amount
    #[arg(allow_hyphen_values = true)]
    pub amount: Money,
    /// New category (left unchanged when omitted)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Expense ID
    pub id: ExpenseId,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show every expense
    #[arg(long)]
    pub all: bool,
    /// Show only these expense IDs
    #[arg(long, num_args = 1..)]
    pub ids: Option<Vec<ExpenseId>>,
}

/// Handle the `add` command
pub fn handle_add_command(storage: &Storage, args: AddArgs) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);

    let mut input = NewExpense::new(args.description, args.amount);
    if let Some(category) = args.category {
        input = input.category(category);
    }

    // The warning is shown even if the save below fails
    let pending = service.prepare(input)?;
    if pending.exceeds_budget() {
        println!("Expense exceeds budget");
    }

    super::report_outcome(service.commit(pending).map(|_| {
        println!("Expense added successfully");
    }))
}

/// Handle the `update` command
pub fn handle_update_command(storage: &Storage, args: UpdateArgs) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);
    let changes = ExpenseUpdate {
        description: args.description,
        amount: args.amount,
        category: args.category,
    };

    super::report_outcome(service.update(args.id, changes).map(|expense| {
        println!("Expense {} updated successfully", expense.id);
    }))
}

/// Handle the `delete` command
pub fn handle_delete_command(storage: &Storage, args: DeleteArgs) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);

    super::report_outcome(service.delete(args.id).map(|removed| {
        println!("Expense {} deleted successfully", removed.id);
    }))
}

/// Handle the `list` command
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);
    let selection = ListSelection::from_flags(args.all, args.ids);

    let listing = service.list(&selection)?;
    print!("{}", format_expense_list(&listing, &settings.currency_symbol));

    Ok(())
}
