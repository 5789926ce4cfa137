//! Fixed-width identifier normalization and quantity coercion.
//!
//! CIP/UCD codes arrive as text, as integers, or as floats rendered with a
//! trailing `.0`. Every present identifier column is rewritten to a digit
//! string left-padded with zeros to the column width. Values longer than the
//! width keep all their digits and are counted as overflows.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, DataType, NamedFrom, Series};
use tracing::{debug, warn};

use cip_model::IdentifierColumn;
use cip_model::columns::QTE;

use crate::error::{NormalizeError, Result};
use crate::frame_utils::{has_column, numeric_column_f64, raw_string_column};
use crate::par::map_rows;

/// Identifier columns rewritten by [`normalize_ids`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSummary {
    /// Columns present in the table, in canonical order.
    pub normalized: Vec<IdentifierColumn>,
    /// Values wider than their column, per column. Only non-zero counts are kept.
    pub overflows: BTreeMap<IdentifierColumn, usize>,
}

/// Normalizes a single identifier value to `width` digits.
///
/// # Examples
///
/// ```
/// use cip_dose::normalize_identifier;
///
/// assert_eq!(normalize_identifier("3400930.0", 7), "3400930");
/// assert_eq!(normalize_identifier("34009 300 1", 13), "0000340093001");
/// assert_eq!(normalize_identifier("", 7), "0000000");
/// ```
pub fn normalize_identifier(raw: &str, width: usize) -> String {
    let without_artifact = raw.strip_suffix(".0").unwrap_or(raw);
    let digits: String = without_artifact
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    format!("{digits:0>width$}")
}

/// Normalizes an optional identifier cell; null cells become all zeros.
pub fn normalize_identifier_cell(raw: Option<&str>, column: IdentifierColumn) -> String {
    match raw {
        Some(value) => normalize_identifier(value, column.width()),
        None => column.zero_value(),
    }
}

/// Rewrites every present identifier column of `df` in place and coerces the
/// quantity column to `Float64`.
pub fn normalize_ids(df: &mut DataFrame, parallel: bool) -> Result<IdentifierSummary> {
    let mut summary = IdentifierSummary::default();
    for column in IdentifierColumn::ALL {
        let name = column.column_name();
        if !has_column(df, name) {
            continue;
        }
        let raw = raw_string_column(df, name)?;
        let normalized: Vec<String> = map_rows(&raw, parallel, |value| {
            normalize_identifier_cell(value.as_deref(), column)
        });
        let overflow = normalized
            .iter()
            .filter(|value| value.len() > column.width())
            .count();
        if overflow > 0 {
            warn!(
                column = name,
                width = column.width(),
                count = overflow,
                "identifier values exceed column width and were kept unchanged"
            );
            summary.overflows.insert(column, overflow);
        }
        df.with_column(Series::new(name.into(), normalized))?;
        summary.normalized.push(column);
    }
    if has_column(df, QTE) {
        coerce_quantity(df)?;
    }
    debug!(columns = summary.normalized.len(), "identifier columns normalized");
    Ok(summary)
}

/// Coerces the quantity column to `Float64`; unparsable cells become null.
fn coerce_quantity(df: &mut DataFrame) -> Result<()> {
    let dtype = df.column(QTE)?.dtype().clone();
    if !is_coercible_quantity_dtype(&dtype) {
        return Err(NormalizeError::QuantityType {
            column: QTE.to_string(),
            dtype: dtype.to_string(),
        });
    }
    let values = numeric_column_f64(df, QTE)?;
    df.with_column(Series::new(QTE.into(), values))?;
    Ok(())
}

fn is_coercible_quantity_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Null
            | DataType::Boolean
            | DataType::String
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
