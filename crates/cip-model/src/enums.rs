//! Type-safe enumerations for the reference table.
//!
//! These enums give compile-time names to concepts that are stored as plain
//! strings in the source file and in the output tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CipError;

/// Pharmaceutical presentation detected in a product label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Form {
    Tablet,
    ScoredTablet,
    Capsule,
    EyeDrop,
    Solution,
    Injection,
    Patch,
    Vial,
    PreFilledPen,
    Suspension,
    Syrup,
    Sachet,
}

impl Form {
    pub const ALL: [Form; 12] = [
        Form::Tablet,
        Form::ScoredTablet,
        Form::Capsule,
        Form::EyeDrop,
        Form::Solution,
        Form::Injection,
        Form::Patch,
        Form::Vial,
        Form::PreFilledPen,
        Form::Suspension,
        Form::Syrup,
        Form::Sachet,
    ];

    /// Returns the name written to the `forme` output column.
    pub fn as_str(self) -> &'static str {
        match self {
            Form::Tablet => "tablet",
            Form::ScoredTablet => "scored-tablet",
            Form::Capsule => "capsule",
            Form::EyeDrop => "eye-drop",
            Form::Solution => "solution",
            Form::Injection => "injection",
            Form::Patch => "patch",
            Form::Vial => "vial",
            Form::PreFilledPen => "pre-filled-pen",
            Form::Suspension => "suspension",
            Form::Syrup => "syrup",
            Form::Sachet => "sachet",
        }
    }

    /// Liquid presentations where a concentration times a unit volume gives
    /// the per-unit dose.
    pub fn is_volumetric(self) -> bool {
        matches!(
            self,
            Form::EyeDrop | Form::Solution | Form::Injection | Form::Vial
        )
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Form {
    type Err = CipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Form::ALL
            .into_iter()
            .find(|form| form.as_str() == normalized)
            .ok_or_else(|| CipError::UnknownForm(s.to_string()))
    }
}

/// Fixed-width identifier columns of the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IdentifierColumn {
    Cip13,
    Cip7,
    Ucd13,
    Ucd7,
}

impl IdentifierColumn {
    pub const ALL: [IdentifierColumn; 4] = [
        IdentifierColumn::Cip13,
        IdentifierColumn::Cip7,
        IdentifierColumn::Ucd13,
        IdentifierColumn::Ucd7,
    ];

    /// Column name after ingest renaming.
    pub fn column_name(&self) -> &'static str {
        match self {
            IdentifierColumn::Cip13 => "CIP13",
            IdentifierColumn::Cip7 => "CIP7",
            IdentifierColumn::Ucd13 => "UCD13",
            IdentifierColumn::Ucd7 => "UCD7",
        }
    }

    /// Number of digits a normalized value carries.
    pub fn width(&self) -> usize {
        match self {
            IdentifierColumn::Cip13 | IdentifierColumn::Ucd13 => 13,
            IdentifierColumn::Cip7 | IdentifierColumn::Ucd7 => 7,
        }
    }

    /// The all-zero value used when the source cell is absent.
    pub fn zero_value(&self) -> String {
        "0".repeat(self.width())
    }
}

impl fmt::Display for IdentifierColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for IdentifierColumn {
    type Err = CipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        IdentifierColumn::ALL
            .into_iter()
            .find(|column| column.column_name() == normalized)
            .ok_or_else(|| CipError::UnknownIdentifier(s.to_string()))
    }
}
