//! Summary CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::TrackerResult;
use crate::services::{SummaryFilter, SummaryService};
use crate::storage::Storage;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Month to summarize (1-12), within --year
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12), requires = "year")]
    pub month: Option<u32>,
    /// Year to summarize
    #[arg(long)]
    pub year: Option<i32>,
    /// Only count expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Summarize every expense
    #[arg(long)]
    pub all: bool,
}

impl From<SummaryArgs> for SummaryFilter {
    fn from(args: SummaryArgs) -> Self {
        SummaryFilter {
            all: args.all,
            year: args.year,
            month: args.month,
            category: args.category,
        }
    }
}

/// Handle the `summary` command
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> TrackerResult<()> {
    let service = SummaryService::new(storage);
    let summary = service.summarize(&args.into())?;

    println!(
        "{}",
        format_summary(summary.as_ref(), &settings.currency_symbol)
    );

    Ok(())
}
