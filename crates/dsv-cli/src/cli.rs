//! CLI argument definitions for the dataset-structure validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dsv",
    version,
    about = "Dataset structure validator - aggregate and report validation issues",
    long_about = "Aggregate validation findings collected while scanning a dataset\n\
                  and render them as a console report or a structured JSON result."
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
    /// Render a report from collected issues and dataset statistics.
    Report(ReportArgs),

    /// List all registered issue codes.
    Codes,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to a JSON file holding collected issues and the dataset summary.
    #[arg(value_name = "ISSUES_JSON")]
    pub issues_file: PathBuf,

    /// Write the structured JSON result to PATH instead of printing the
    /// console report. Use "-" for stdout.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// List every file for each issue instead of truncating to the first two.
    #[arg(long = "show-all")]
    pub show_all: bool,
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
