//! Per-package dose aggregation.
//!
//! Combines the label facts with the pack quantity into the unit count, the
//! total dose and the human-readable `DOSE` string.

use cip_common::format_numeric;
use cip_model::{ComboDose, Identifiers, LabelFacts, PackageRecord, ReferenceLabels};

/// Source-side fields of one package, after identifier normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageSource {
    pub identifiers: Identifiers,
    pub label: Option<String>,
    pub reference_labels: ReferenceLabels,
    pub laboratory: Option<String>,
    pub ephmra_class: Option<String>,
    pub quantity: Option<f64>,
}

/// Unit count of the pack: explicit quantity first, then the label's trailing integer.
pub fn units_per_pack(quantity: Option<f64>, units_from_label: Option<i64>) -> Option<f64> {
    quantity.or(units_from_label.map(|units| units as f64))
}

/// Total active mass per pack, undefined for combination products.
pub fn total_dose_mg(
    combo: Option<ComboDose>,
    units_per_pack: Option<f64>,
    dose_per_unit_mg: Option<f64>,
) -> Option<f64> {
    if combo.is_some() {
        return None;
    }
    Some(units_per_pack? * dose_per_unit_mg?)
}

/// Which rendering of the `DOSE` column applies to a package.
///
/// Branches are checked in declaration order; the first one whose guard
/// holds wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoseSummary {
    /// Both combination doses are known.
    Combo {
        combo: ComboDose,
        units: Option<f64>,
    },
    /// No per-unit dose, but a concentration is known.
    Concentration {
        mg_per_ml: f64,
        unit_volume_ml: Option<f64>,
        units: Option<f64>,
    },
    /// A per-unit dose is known.
    PerUnit { dose_mg: f64, units: Option<f64> },
    /// Nothing to show.
    Unknown,
}

impl DoseSummary {
    pub fn classify(
        combo: Option<ComboDose>,
        dose_per_unit_mg: Option<f64>,
        concentration_mg_per_ml: Option<f64>,
        unit_volume_ml: Option<f64>,
        units: Option<f64>,
    ) -> Self {
        if let Some(combo) = combo {
            return DoseSummary::Combo { combo, units };
        }
        if dose_per_unit_mg.is_none()
            && let Some(mg_per_ml) = concentration_mg_per_ml
        {
            return DoseSummary::Concentration {
                mg_per_ml,
                unit_volume_ml,
                units,
            };
        }
        if let Some(dose_mg) = dose_per_unit_mg {
            return DoseSummary::PerUnit { dose_mg, units };
        }
        DoseSummary::Unknown
    }

    pub fn render(&self) -> Option<String> {
        let (mut text, units) = match *self {
            DoseSummary::Combo { combo, units } => (
                format!("{:.2} mg + {:.2} mg", combo.a_mg, combo.b_mg),
                units,
            ),
            DoseSummary::Concentration {
                mg_per_ml,
                unit_volume_ml,
                units,
            } => {
                let mut text = format!("{mg_per_ml:.3} mg/mL");
                if let Some(volume) = unit_volume_ml {
                    text.push_str(&format!(", {} mL/unit", format_numeric(volume)));
                }
                (text, units)
            }
            DoseSummary::PerUnit { dose_mg, units } => (format!("{dose_mg:.2} mg"), units),
            DoseSummary::Unknown => return None,
        };
        if let Some(units) = units {
            text.push_str(&format!(" × {}", units as i64));
        }
        Some(text)
    }
}

/// Builds the package record from its source fields and label facts.
pub fn aggregate(source: PackageSource, facts: LabelFacts) -> PackageRecord {
    let units = units_per_pack(source.quantity, facts.units_from_label);
    let total = total_dose_mg(facts.combo, units, facts.dose_per_unit_mg);
    let dose_summary = DoseSummary::classify(
        facts.combo,
        facts.dose_per_unit_mg,
        facts.concentration_mg_per_ml,
        facts.unit_volume_ml,
        units,
    )
    .render();

    PackageRecord {
        identifiers: source.identifiers,
        label: source.label,
        reference_labels: source.reference_labels,
        laboratory: source.laboratory,
        ephmra_class: source.ephmra_class,
        quantity_raw: source.quantity,
        form: facts.form,
        dose_per_unit_mg: facts.dose_per_unit_mg,
        concentration_mg_per_ml: facts.concentration_mg_per_ml,
        unit_volume_ml: facts.unit_volume_ml,
        combo: facts.combo,
        units_per_pack: units,
        total_dose_mg: total,
        dose_summary,
    }
}
