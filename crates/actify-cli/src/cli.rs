//! CLI argument definitions for the ACTIFY dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use actify_model::ActingStatus;

#[derive(Parser)]
#[command(
    name = "actify",
    version,
    about = "ACTIFY - Acting assignment monitoring dashboard",
    long_about = "Monitor temporary acting role assignments from a spreadsheet export.\n\n\
                  Polls the CSV export, classifies each assignment by its end date,\n\
                  and renders summary stats, a department distribution, and the\n\
                  assignment table. Can compose WhatsApp reminders for HR follow-up."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the sheet once and render the dashboard.
    Dashboard(DashboardArgs),

    /// Keep refreshing the dashboard on a fixed interval.
    Watch(WatchArgs),

    /// Compose the WhatsApp reminder for expiring assignments.
    Broadcast(BroadcastArgs),
}

/// Selection of the spreadsheet export to poll.
#[derive(Args)]
pub struct SourceArgs {
    /// Full CSV export URL (takes precedence over --sheet-id/--gid).
    #[arg(long = "sheet-url", value_name = "URL")]
    pub sheet_url: Option<String>,

    /// Spreadsheet id (default: the production acting sheet).
    #[arg(long = "sheet-id", value_name = "ID")]
    pub sheet_id: Option<String>,

    /// Worksheet gid within the spreadsheet.
    #[arg(
        long = "gid",
        value_name = "GID",
        default_value = actify_ingest::DEFAULT_GID
    )]
    pub gid: String,
}

#[derive(Args)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Case-insensitive search over names and departments.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Show only assignments with this status.
    #[arg(long = "status", value_enum)]
    pub status: Option<StatusArg>,

    /// Limit the table to the first N assignments.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct WatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Seconds between refresh cycles.
    #[arg(
        long = "interval-secs",
        value_name = "SECS",
        default_value_t = actify_core::refresh::DEFAULT_REFRESH_INTERVAL.as_secs()
    )]
    pub interval_secs: u64,

    /// Stop after this many refresh cycles (default: run until interrupted).
    #[arg(long = "cycles", value_name = "N")]
    pub cycles: Option<u64>,
}

#[derive(Args)]
pub struct BroadcastArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Include already-expired assignments in the reminder.
    #[arg(long = "include-expired")]
    pub include_expired: bool,
}

/// CLI status filter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Active,
    Expiring,
    Expired,
}

impl From<StatusArg> for ActingStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Active => ActingStatus::Active,
            StatusArg::Expiring => ActingStatus::ExpiringSoon,
            StatusArg::Expired => ActingStatus::Expired,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
