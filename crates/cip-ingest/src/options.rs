//! Options for reading a reference export.

/// Maximum file size accepted by default (500 MB).
pub const MAX_SOURCE_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Number of leading lines searched for the header row by default.
pub const DEFAULT_HEADER_PROBE: usize = 200;

/// Column name that identifies the header row.
pub const HEADER_MARKER: &str = "CodeCIP13";

/// Text encoding of the source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceEncoding {
    /// BOM first, then a UTF-16 LE sniff, otherwise UTF-8.
    #[default]
    Auto,
    Utf8,
    Utf16Le,
    Utf16Be,
}

/// Options for [`crate::read_cip_ucd`].
#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub separator: u8,
    pub header_probe_lines: usize,
    pub encoding: SourceEncoding,
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            separator: b';',
            header_probe_lines: DEFAULT_HEADER_PROBE,
            encoding: SourceEncoding::Auto,
            max_file_size: MAX_SOURCE_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_header_probe_lines(mut self, lines: usize) -> Self {
        self.header_probe_lines = lines;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: SourceEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }
}
