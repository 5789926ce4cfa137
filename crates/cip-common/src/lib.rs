//! Shared utilities for CIP dose crates.
//!
//! Polars `AnyValue` conversions and decimal parsing that accepts the comma
//! separator used in French product labels.

pub mod polars;

pub use polars::{any_to_f64, any_to_string, format_numeric, parse_decimal, parse_i64};
