//! CIP/UCD dose normalization CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use cip_cli::commands::run;
use cip_cli::logging::{LogConfig, LogFormat, init_logging};
use cip_cli::summary::print_summary;
use cip_cli::types::RunConfig;
use cip_model::OutputFormat;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, OutputFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&run_config_from_cli(&cli)) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run_config_from_cli(cli: &Cli) -> RunConfig {
    RunConfig {
        outdir: cli.outdir.clone(),
        format: match cli.format {
            OutputFormatArg::Parquet => OutputFormat::Parquet,
            OutputFormatArg::Csv => OutputFormat::Csv,
        },
        label_column: cli.label_column.clone(),
        parallel: !cli.sequential,
        dry_run: cli.dry_run,
        report_path: cli.report.clone(),
        progress: io::stderr().is_terminal() && cli.log_file.is_none(),
        ..RunConfig::new(&cli.cipucd)
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
