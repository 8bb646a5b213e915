//! Config CLI command

use clap::Args;

use crate::config::{paths::TrackerPaths, settings::Settings};
use crate::error::TrackerResult;

/// Arguments for `config`
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the active settings to the settings file
    #[arg(long)]
    pub write: bool,
}

/// Handle the `config` command
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &Settings,
    args: ConfigArgs,
) -> TrackerResult<()> {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Data file:     {}", paths.data_file().display());
    println!("Settings file: {}", paths.settings_file().display());
    println!("Audit log:     {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Schema version:  {}", settings.schema_version);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!(
        "  Audit log:       {}",
        if settings.audit_log { "enabled" } else { "disabled" }
    );

    if args.write {
        settings.save(paths)?;
        println!();
        println!("Settings written to {}", paths.settings_file().display());
    }

    Ok(())
}
