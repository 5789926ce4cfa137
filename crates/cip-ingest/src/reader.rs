//! Reading of semicolon-separated CIP/UCD exports.

use std::path::{Path, PathBuf};

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::decode::decode_source;
use crate::error::{IngestError, Result};
use crate::header::{canonical_headers, detect_header_row};
use crate::options::{HEADER_MARKER, IngestOptions};

/// A loaded export with its provenance.
#[derive(Debug, Clone)]
pub struct SourceTable {
    /// All cells as trimmed strings; empty cells are null.
    pub data: DataFrame,
    pub path: PathBuf,
    /// Zero-based line index of the header row in the decoded file.
    pub header_row: usize,
    pub encoding: &'static str,
    /// SHA-256 of the raw file bytes, lowercase hex.
    pub sha256: String,
}

fn io_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reads a CIP/UCD export into a string-typed DataFrame.
///
/// The header row is searched among the first lines of the file, columns are
/// renamed to their canonical names (`CodeCIP13` → `CIP13`, ...) and fully
/// empty rows are skipped.
pub fn read_cip_ucd(path: &Path, options: &IngestOptions) -> Result<SourceTable> {
    check_file_size(path, options.max_file_size)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let sha256 = hex::encode(Sha256::digest(&bytes));

    let decoded = decode_source(&bytes, options.encoding);
    if decoded.text.trim().is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let header_row = detect_header_row(
        &decoded.text,
        HEADER_MARKER,
        char::from(options.separator),
        options.header_probe_lines,
    );
    debug!(path = %path.display(), header_row, encoding = decoded.encoding, "header row detected");

    let body = decoded
        .text
        .lines()
        .skip(header_row)
        .collect::<Vec<_>>()
        .join("\n");
    let data = parse_table(&body, options.separator, path)?;

    info!(
        path = %path.display(),
        rows = data.height(),
        columns = data.width(),
        encoding = decoded.encoding,
        "source table loaded"
    );

    Ok(SourceTable {
        data,
        path: path.to_path_buf(),
        header_row,
        encoding: decoded.encoding,
        sha256,
    })
}

fn parse_table(body: &str, separator: u8, path: &Path) -> Result<DataFrame> {
    let csv_error = |err: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());
    let headers = canonical_headers(reader.headers().map_err(csv_error)?.iter());

    let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        for (idx, column) in values.iter_mut().enumerate() {
            let cell = record
                .get(idx)
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string);
            column.push(cell);
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(values)
        .map(|(name, column)| Series::new(name.as_str().into(), column).into_column())
        .collect();
    Ok(DataFrame::new(columns)?)
}
