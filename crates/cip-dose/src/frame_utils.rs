//! Column access helpers over Polars DataFrames.

use polars::prelude::{AnyValue, DataFrame};

use cip_common::{any_to_f64, any_to_string};

use crate::error::Result;

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Reads a column as raw strings, keeping `None` only for null cells.
pub(crate) fn raw_string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        if matches!(value, AnyValue::Null) {
            values.push(None);
        } else {
            values.push(Some(any_to_string(value)));
        }
    }
    Ok(values)
}

pub(crate) fn numeric_column_f64(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_f64(value).filter(|v| v.is_finite()));
    }
    Ok(values)
}

/// Reads a column when present, otherwise yields one `None` per row.
pub(crate) fn optional_column<T: Clone>(
    df: &DataFrame,
    name: &str,
    read: impl Fn(&DataFrame, &str) -> Result<Vec<Option<T>>>,
) -> Result<Vec<Option<T>>> {
    if has_column(df, name) {
        read(df, name)
    } else {
        Ok(vec![None; df.height()])
    }
}
