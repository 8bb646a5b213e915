//! Budget CLI commands

use clap::Args;

use crate::error::TrackerResult;
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Arguments for `setbudget`
#[derive(Args, Debug)]
pub struct SetBudgetArgs {
    /// Monthly budget amount (e.g., "500" or "500.00")
    #[arg(allow_hyphen_values = true)]
    pub budget: Money,
}

/// Handle the `setbudget` command
pub fn handle_setbudget_command(storage: &Storage, args: SetBudgetArgs) -> TrackerResult<()> {
    let service = BudgetService::new(storage);

    super::report_outcome(service.set_budget(args.budget).map(|_| {
        println!("Budget set successfully");
    }))
}
