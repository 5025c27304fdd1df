//! CLI argument definitions for the datastandard report tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dstd",
    version,
    about = "Datastandard reports - list the attributes of a category and its ancestors",
    long_about = "Render the attribute report of a datastandard category.\n\n\
                  Walks from the requested category up to its top-most ancestor and lists\n\
                  every attached attribute with its description, type signature and groups."
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
    /// Report the attributes of a category and all of its ancestors.
    Report(ReportArgs),

    /// List all categories of the datastandard.
    Categories(DatastandardArgs),
}

#[derive(Args)]
pub struct DatastandardArgs {
    /// Datastandard JSON file (default: $DATASTANDARD_FILE or the bundled standard).
    #[arg(long = "datastandard", value_name = "FILE")]
    pub datastandard: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Id of the category to report on.
    #[arg(value_name = "CATEGORY_ID")]
    pub category_id: String,

    #[command(flatten)]
    pub source: DatastandardArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Write csv/json output to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Csv,
    Json,
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
