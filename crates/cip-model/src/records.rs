//! Row-level records produced by the dose normalization pipeline.

use serde::{Deserialize, Serialize};

use crate::enums::{Form, IdentifierColumn};

/// Two co-formulated active-ingredient masses read from a `A mg/B mg` label.
///
/// Holding both sides in one value keeps the pair jointly present or jointly
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComboDose {
    pub a_mg: f64,
    pub b_mg: f64,
}

impl ComboDose {
    pub fn new(a_mg: f64, b_mg: f64) -> Self {
        Self { a_mg, b_mg }
    }

    /// Component doses in index order.
    pub fn components(&self) -> [f64; 2] {
        [self.a_mg, self.b_mg]
    }
}

/// Facts extracted from a single label string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelFacts {
    pub form: Option<Form>,
    pub dose_per_unit_mg: Option<f64>,
    pub concentration_mg_per_ml: Option<f64>,
    pub unit_volume_ml: Option<f64>,
    pub combo: Option<ComboDose>,
    /// Trailing integer of the label, used when the quantity column is empty.
    pub units_from_label: Option<i64>,
}

/// Normalized fixed-width identifiers of one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifiers {
    pub cip13: String,
    pub cip7: String,
    pub ucd13: String,
    pub ucd7: String,
}

impl Default for Identifiers {
    fn default() -> Self {
        Self {
            cip13: IdentifierColumn::Cip13.zero_value(),
            cip7: IdentifierColumn::Cip7.zero_value(),
            ucd13: IdentifierColumn::Ucd13.zero_value(),
            ucd7: IdentifierColumn::Ucd7.zero_value(),
        }
    }
}

impl Identifiers {
    pub fn get(&self, column: IdentifierColumn) -> &str {
        match column {
            IdentifierColumn::Cip13 => &self.cip13,
            IdentifierColumn::Cip7 => &self.cip7,
            IdentifierColumn::Ucd13 => &self.ucd13,
            IdentifierColumn::Ucd7 => &self.ucd7,
        }
    }

    pub fn set(&mut self, column: IdentifierColumn, value: String) {
        match column {
            IdentifierColumn::Cip13 => self.cip13 = value,
            IdentifierColumn::Cip7 => self.cip7 = value,
            IdentifierColumn::Ucd13 => self.ucd13 = value,
            IdentifierColumn::Ucd7 => self.ucd7 = value,
        }
    }
}

/// `LIB_UCD` and `LIB_CIP` values of a row, kept whichever column is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLabels {
    pub ucd: Option<String>,
    pub cip: Option<String>,
}

/// One row of the reference table after normalization and aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub identifiers: Identifiers,
    pub label: Option<String>,
    pub reference_labels: ReferenceLabels,
    pub laboratory: Option<String>,
    pub ephmra_class: Option<String>,
    pub quantity_raw: Option<f64>,
    pub form: Option<Form>,
    pub dose_per_unit_mg: Option<f64>,
    pub concentration_mg_per_ml: Option<f64>,
    pub unit_volume_ml: Option<f64>,
    pub combo: Option<ComboDose>,
    pub units_per_pack: Option<f64>,
    pub total_dose_mg: Option<f64>,
    pub dose_summary: Option<String>,
}

impl PackageRecord {
    pub fn combo_a_mg(&self) -> Option<f64> {
        self.combo.map(|combo| combo.a_mg)
    }

    pub fn combo_b_mg(&self) -> Option<f64> {
        self.combo.map(|combo| combo.b_mg)
    }

    pub fn is_combo(&self) -> bool {
        self.combo.is_some()
    }
}

/// One active ingredient of one package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub identifiers: Identifiers,
    pub label: Option<String>,
    pub reference_labels: ReferenceLabels,
    pub laboratory: Option<String>,
    pub ephmra_class: Option<String>,
    pub form: Option<Form>,
    pub units_per_pack: Option<f64>,
    pub concentration_mg_per_ml: Option<f64>,
    pub unit_volume_ml: Option<f64>,
    /// 1-based ordinal among the package's components.
    pub component_index: u32,
    pub dose_per_unit_mg_component: Option<f64>,
    pub total_dose_mg_component: Option<f64>,
}
