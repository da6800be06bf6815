//! CLI argument definitions for the roster shell.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster Studio - curate a tabular passenger dataset",
    long_about = "View, edit, and clean a tabular passenger dataset.\n\n\
                  Reads CSV and spreadsheet files, validates edits against the\n\
                  fixed per-column rule set, and saves every change under the\n\
                  storage directory."
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

    /// Directory that edited datasets are saved under.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = "data",
        global = true
    )]
    pub data_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the dataset as a table.
    Show(ShowArgs),

    /// Print a per-column profile of the dataset.
    Profile(ProfileArgs),

    /// Validate and append a new row, then save.
    Add(AddArgs),

    /// Update columns of an existing row, then save.
    Update(UpdateArgs),

    /// Delete a row by index, then save.
    Delete(DeleteArgs),

    /// Run the cleaning pipeline and save the result.
    Clean(CleanArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the dataset file (.csv, .xlsx, or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show at most this many rows.
    #[arg(long = "limit", value_name = "ROWS")]
    pub limit: Option<usize>,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Path to the dataset file (.csv, .xlsx, or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Path to the dataset file (.csv, .xlsx, or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Cell values for the new row, one pair per column.
    #[arg(long = "set", value_name = "COLUMN=VALUE", required = true)]
    pub set: Vec<String>,
}

#[derive(Parser)]
pub struct UpdateArgs {
    /// Path to the dataset file (.csv, .xlsx, or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// 0-based index of the row to update.
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Replacement values; untouched columns keep their cells.
    #[arg(long = "set", value_name = "COLUMN=VALUE", required = true)]
    pub set: Vec<String>,
}

#[derive(Parser)]
pub struct DeleteArgs {
    /// Path to the dataset file (.csv, .xlsx, or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// 0-based index of the row to delete.
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the dataset file (.csv, .xlsx, or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
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
