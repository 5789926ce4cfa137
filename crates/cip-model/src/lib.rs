//! Data model for the CIP/UCD dose normalization workspace.
//!
//! Records are created once per run by `cip-dose` and consumed verbatim by
//! the output writers.

pub mod columns;
pub mod enums;
pub mod error;
pub mod processing;
pub mod records;

pub use enums::{Form, IdentifierColumn};
pub use error::{CipError, Result};
pub use processing::{NormalizationReport, OutputFormat, OutputPaths};
pub use records::{
    ComboDose, ComponentRecord, Identifiers, LabelFacts, PackageRecord,
    ReferenceLabels,
};
