//! Export CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::error::{TrackerError, TrackerResult};
use crate::export::export_csv;
use crate::storage::Storage;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output CSV file path
    pub filename: PathBuf,
}

/// Handle the `export` command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> TrackerResult<()> {
    let file = File::create(&args.filename).map_err(|e| {
        TrackerError::Export(format!(
            "Failed to create {}: {}",
            args.filename.display(),
            e
        ))
    })?;

    let rows = export_csv(storage, BufWriter::new(file))?;
    tracing::info!(rows, path = %args.filename.display(), "exported records");

    println!("Expenses exported successfully");
    Ok(())
}
