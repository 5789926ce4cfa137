//! Parquet export with CSV fallback.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, ParquetWriter, SerWriter};
use tracing::{info, warn};

use cip_model::{OutputFormat, OutputPaths};

use crate::error::{OutputError, Result};

/// File stem of the package table.
pub const PACKAGES_STEM: &str = "cip13_norm";

/// File stem of the component table.
pub const COMPONENTS_STEM: &str = "cip13_components";

/// Options for [`write_outputs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
}

impl OutputOptions {
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Path of one output table inside `outdir`.
pub fn output_path(outdir: &Path, stem: &str, format: OutputFormat) -> PathBuf {
    outdir.join(format!("{stem}.{}", format.extension()))
}

/// Writes both tables into `outdir`, creating it when needed.
///
/// Parquet is tried first unless CSV was requested. When the Parquet writer
/// fails, its partial files are removed and both tables are written as CSV.
pub fn write_outputs(
    packages: &DataFrame,
    components: &DataFrame,
    outdir: &Path,
    options: &OutputOptions,
) -> Result<OutputPaths> {
    fs::create_dir_all(outdir).map_err(|source| OutputError::CreateDir {
        path: outdir.to_path_buf(),
        source,
    })?;

    if options.format == OutputFormat::Parquet {
        match write_pair(packages, components, outdir, OutputFormat::Parquet) {
            Ok(paths) => return Ok(paths),
            Err(err) => warn!(error = %err, "parquet export failed, writing CSV instead"),
        }
    }
    write_pair(packages, components, outdir, OutputFormat::Csv)
}

fn write_pair(
    packages: &DataFrame,
    components: &DataFrame,
    outdir: &Path,
    format: OutputFormat,
) -> Result<OutputPaths> {
    let packages_path = output_path(outdir, PACKAGES_STEM, format);
    let components_path = output_path(outdir, COMPONENTS_STEM, format);

    write_frame(packages, &packages_path, format)?;
    if let Err(err) = write_frame(components, &components_path, format) {
        let _ = fs::remove_file(&packages_path);
        return Err(err);
    }

    info!(
        packages = %packages_path.display(),
        components = %components_path.display(),
        format = format.extension(),
        "outputs written"
    );
    Ok(OutputPaths {
        packages: packages_path,
        components: components_path,
        format,
    })
}

/// Writes one table; a partially written file is removed on failure.
pub fn write_frame(df: &DataFrame, path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut df = df.clone();
    let written = match format {
        OutputFormat::Parquet => ParquetWriter::new(file).finish(&mut df).map(|_| ()),
        OutputFormat::Csv => CsvWriter::new(file)
            .include_header(true)
            .with_separator(b',')
            .finish(&mut df),
    };
    written.map_err(|err| {
        let _ = fs::remove_file(path);
        OutputError::Write {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })
}
