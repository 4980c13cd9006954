//! CLI argument definitions for the payload card.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use payload_core::{SortDirection, SortKey};

#[derive(Parser)]
#[command(
    name = "payload-card",
    version,
    about = "Total payload mass per mission, filtered by nationality",
    long_about = "Render the total-payload-per-mission card for a mission dataset.\n\n\
                  Rows can be filtered by payload nationality and sorted by mission\n\
                  name or total mass; a proportional breakdown follows the table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Settings file (default: platform config folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the card: table plus chart breakdown.
    Card(ViewArgs),

    /// Print the chart input (labels, values, colors) as JSON.
    Chart(ViewArgs),

    /// List the nationality filter options.
    Nationalities(DatasetArgs),
}

#[derive(Args)]
pub struct DatasetArgs {
    /// Mission dataset JSON file (default: bundled dataset).
    #[arg(value_name = "DATASET")]
    pub dataset: Option<PathBuf>,
}

#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Only count payloads of this nationality.
    #[arg(long = "nationality", short = 'n', value_name = "NATIONALITY")]
    pub nationality: Option<String>,

    /// Column to sort by.
    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortKeyArg>,

    /// Sort direction (used with --sort).
    #[arg(long = "order", value_enum, default_value = "asc", requires = "sort")]
    pub order: OrderArg,

    /// Activate a column header; repeat to step through the sort cycle.
    #[arg(long = "click", value_enum, value_name = "COLUMN")]
    pub clicks: Vec<SortKeyArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortKeyArg {
    Mission,
    Mass,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Mission => Self::Mission,
            SortKeyArg::Mass => Self::Mass,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortDirection {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => Self::Asc,
            OrderArg::Desc => Self::Desc,
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
