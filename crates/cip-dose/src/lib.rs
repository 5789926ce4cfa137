//! Label parsing and dose normalization for CIP/UCD reference tables.
//!
//! Each source row describes a medicinal package by its identifiers, a
//! free-text label and an optional unit count. A run:
//!
//! - rewrites identifier columns to fixed-width digit strings
//! - extracts form, strength, concentration, unit volume and combination
//!   doses from the label
//! - derives units per pack, total dose and a readable dose summary
//! - splits combination products into one component row per ingredient
//!
//! [`normalize_table`] runs the whole pass over a Polars DataFrame;
//! [`packages_frame`] and [`components_frame`] turn the result back into
//! DataFrames.

pub mod components;
pub mod dose;
pub mod error;
pub mod frame;
mod frame_utils;
pub mod identifiers;
pub mod label;
pub mod options;
mod par;
pub mod pipeline;

pub use components::{explode, explode_all};
pub use dose::{DoseSummary, PackageSource, aggregate, total_dose_mg, units_per_pack};
pub use error::{NormalizeError, Result};
pub use frame::{components_frame, packages_frame};
pub use identifiers::{
    IdentifierSummary, normalize_identifier, normalize_identifier_cell, normalize_ids,
};
pub use label::{
    DoseToken, FORM_TOKENS, detect_form, dose_tokens, parse_label, to_mg, trailing_count,
};
pub use options::NormalizeOptions;
pub use pipeline::{NormalizedTables, SourceLayout, normalize_table, select_label_column};
