//! Loading of CIP/UCD reference exports.
//!
//! The public export is a semicolon-separated text file, UTF-16 encoded, with
//! a free-form preamble above the header row. [`read_cip_ucd`] decodes it,
//! locates the header, renames the columns to their canonical names and
//! returns every cell as a string.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cip_ingest::{IngestOptions, read_cip_ucd};
//!
//! let source = read_cip_ucd(Path::new("CIP_UCD.csv"), &IngestOptions::default())?;
//! println!("{} rows, sha256 {}", source.data.height(), source.sha256);
//! ```

mod decode;
mod error;
mod header;
mod options;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Options ===
pub use options::{
    DEFAULT_HEADER_PROBE, HEADER_MARKER, IngestOptions, MAX_SOURCE_FILE_SIZE, SourceEncoding,
};

// === Reading ===
pub use decode::{Decoded, decode_source};
pub use header::{COLUMN_RENAMES, canonical_column_name, detect_header_row};
pub use reader::{SourceTable, check_file_size, read_cip_ucd};
