//! CLI argument definitions for Spyglass.

use clap::Parser;

use crate::report::due::DueDateFormat;

/// Version string with build metadata injected by `build.rs`.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SPY_GIT_COMMIT"),
    ", built ",
    env!("SPY_BUILD_TIMESTAMP"),
    ")"
);

/// Spyglass - console task reports for ClickUp spaces.
///
/// Fetches every list and task in a space, buckets tasks by status, and
/// prints urgency-sorted tables grouped by status and by list.
#[derive(Parser, Debug)]
#[command(name = "spy")]
#[command(author, version, long_version = LONG_VERSION)]
#[command(about = "Console task reports for ClickUp spaces", long_about = None)]
pub struct Cli {
    /// ClickUp API key
    #[arg(
        short = 'k',
        long = "api-key",
        env = "CLICKUP_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// ClickUp space to report on
    #[arg(short = 's', long = "space-id", env = "CLICKUP_SPACE_ID")]
    pub space_id: Option<String>,

    /// Wire format for task due dates
    #[arg(long = "due-date-format", value_enum, default_value_t = DueDateFormat::EpochMillis)]
    pub due_date_format: DueDateFormat,

    /// Skip the weekly completion summary
    #[arg(long = "no-weekly")]
    pub no_weekly: bool,

    /// Output the computed report as JSON instead of tables
    #[arg(long = "json")]
    pub json: bool,

    /// Disable ANSI colors in the report
    #[arg(long = "no-color")]
    pub no_color: bool,
}
