use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Parquet, falling back to CSV when the writer fails.
    #[default]
    Parquet,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Parquet => "parquet",
            OutputFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputPaths {
    pub packages: PathBuf,
    pub components: PathBuf,
    /// Format actually written, which differs from the requested one after a fallback.
    pub format: OutputFormat,
}

/// Counts describing one normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    pub label_column: String,
    pub packages: usize,
    pub components: usize,
    pub combos: usize,
    pub without_form: usize,
    pub without_summary: usize,
    pub forms: BTreeMap<String, usize>,
    /// Identifier values longer than their column width, per column.
    pub identifier_overflows: BTreeMap<String, usize>,
    pub source_sha256: Option<String>,
}

impl NormalizationReport {
    pub fn has_identifier_overflows(&self) -> bool {
        self.identifier_overflows.values().any(|count| *count > 0)
    }
}
