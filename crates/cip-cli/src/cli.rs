//! CLI argument definitions for `cip-dose`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cip-dose",
    version,
    about = "Normalize CIP/UCD drug package labels into dose tables",
    long_about = "Read a CIP/UCD reference export, normalize identifiers, parse package\n\
                  labels into form and dose facts, and write a package table and a\n\
                  per-ingredient component table (Parquet, with CSV fallback)."
)]
pub struct Cli {
    /// CIP/UCD export (semicolon separated, UTF-16 or UTF-8).
    #[arg(long = "cipucd", value_name = "PATH")]
    pub cipucd: PathBuf,

    /// Output directory for the generated tables.
    #[arg(long = "outdir", value_name = "DIR", default_value = "out")]
    pub outdir: PathBuf,

    /// Table format to write.
    #[arg(long = "format", value_enum, default_value = "parquet")]
    pub format: OutputFormatArg,

    /// Parse this column instead of LIB_UCD/LIB_CIP.
    #[arg(long = "label-column", value_name = "NAME")]
    pub label_column: Option<String>,

    /// Run every stage on a single thread.
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Normalize and report without writing tables.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the run report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Parquet,
    Csv,
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
