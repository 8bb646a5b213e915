//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod config;
pub mod expense;
pub mod export;
pub mod history;
pub mod summary;

pub use budget::{handle_setbudget_command, SetBudgetArgs};
pub use config::{handle_config_command, ConfigArgs};
pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, handle_update_command,
    AddArgs, DeleteArgs, ListArgs, UpdateArgs,
};
pub use export::{handle_export_command, ExportArgs};
pub use history::{handle_history_command, HistoryArgs};
pub use summary::{handle_summary_command, SummaryArgs};

use crate::error::TrackerResult;

/// Turn outcomes the user should only be told about into printed messages
///
/// A failed save and a missing expense both leave the process exiting cleanly;
/// every other error is passed through.
pub(crate) fn report_outcome(result: TrackerResult<()>) -> TrackerResult<()> {
    match result {
        Err(e) if e.is_save_failure() => {
            tracing::error!(error = %e, "could not persist expenses");
            println!("Error saving expenses: {}", e);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("{}", e);
            Ok(())
        }
        other => other,
    }
}
