//! Error types for dose normalization.

use thiserror::Error;

/// Table-level failures. Malformed labels and identifiers never end up here;
/// they produce null fields instead.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// None of the identifier or label columns are present.
    #[error("table has no identifier or label column (columns: {found})")]
    MissingColumns { found: String },

    /// An explicitly requested label column is absent.
    #[error("label column '{column}' not found")]
    LabelColumn { column: String },

    /// The quantity column cannot be coerced to numbers at all.
    #[error("quantity column '{column}' has type {dtype} which cannot be read as a number")]
    QuantityType { column: String, dtype: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for NormalizeError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormalizeError::QuantityType {
            column: "QTE".to_string(),
            dtype: "list[str]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "quantity column 'QTE' has type list[str] which cannot be read as a number"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("QTE".into());
        let err: NormalizeError = polars_err.into();
        assert!(matches!(err, NormalizeError::DataFrame { .. }));
    }
}
