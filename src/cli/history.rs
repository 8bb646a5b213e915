//! History CLI command
//!
//! Shows the tail of the audit log.

use clap::Args;

use crate::error::TrackerResult;
use crate::storage::Storage;

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,
}

/// Handle the `history` command
pub fn handle_history_command(storage: &Storage, args: HistoryArgs) -> TrackerResult<()> {
    let entries = match storage.audit() {
        Some(logger) => logger.read_recent(args.count)?,
        None => Vec::new(),
    };

    if entries.is_empty() {
        println!("No history recorded");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }

    Ok(())
}
