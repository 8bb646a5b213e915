use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use expense_tracker::cli::{
    handle_add_command, handle_config_command, handle_delete_command, handle_export_command,
    handle_history_command, handle_list_command, handle_setbudget_command,
    handle_summary_command, handle_update_command, AddArgs, ConfigArgs, DeleteArgs, ExportArgs,
    HistoryArgs, ListArgs, SetBudgetArgs, SummaryArgs, UpdateArgs,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Track personal expenses against a monthly budget",
    long_about = "Records expenses and an optional monthly budget in a JSON file, \
                  lists and summarizes them, and exports everything to CSV."
)]
struct Cli {
    /// Path to the expenses data file
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the monthly budget
    #[command(name = "setbudget")]
    SetBudget(SetBudgetArgs),

    /// Add a new expense
    Add(AddArgs),

    /// Update an existing expense
    Update(UpdateArgs),

    /// Delete an expense
    Delete(DeleteArgs),

    /// List expenses
    List(ListArgs),

    /// Show total spending for a period
    Summary(SummaryArgs),

    /// Export all records to a CSV file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config(ConfigArgs),

    /// Show recent changes from the audit log
    History(HistoryArgs),
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(level),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        return Ok(());
    };

    // Initialize paths and settings
    let paths = TrackerPaths::new(cli.file);
    let settings = Settings::load_or_create(&paths)?;
    tracing::debug!(data_file = %paths.data_file().display(), "resolved paths");

    let storage = Storage::open(&paths, &settings);

    match command {
        Commands::SetBudget(args) => handle_setbudget_command(&storage, args)?,
        Commands::Add(args) => handle_add_command(&storage, args)?,
        Commands::Update(args) => handle_update_command(&storage, args)?,
        Commands::Delete(args) => handle_delete_command(&storage, args)?,
        Commands::List(args) => handle_list_command(&storage, &settings, args)?,
        Commands::Summary(args) => handle_summary_command(&storage, &settings, args)?,
        Commands::Export(args) => handle_export_command(&storage, args)?,
        Commands::Config(args) => handle_config_command(&paths, &settings, args)?,
        Commands::History(args) => handle_history_command(&storage, args)?,
    }

    Ok(())
}
