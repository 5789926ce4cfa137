use std::path::PathBuf;

use cip_model::{NormalizationReport, OutputFormat, OutputPaths};

/// Settings for one run, built from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: PathBuf,
    pub outdir: PathBuf,
    pub format: OutputFormat,
    pub label_column: Option<String>,
    pub parallel: bool,
    pub dry_run: bool,
    pub report_path: Option<PathBuf>,
    /// Show a spinner on stderr while stages run.
    pub progress: bool,
}

impl RunConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            outdir: PathBuf::from("out"),
            format: OutputFormat::default(),
            label_column: None,
            parallel: true,
            dry_run: false,
            report_path: None,
            progress: false,
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub source: PathBuf,
    pub encoding: &'static str,
    pub source_rows: usize,
    pub report: NormalizationReport,
    /// `None` for dry runs.
    pub outputs: Option<OutputPaths>,
    pub report_path: Option<PathBuf>,
}
