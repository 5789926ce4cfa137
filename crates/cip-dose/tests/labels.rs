//! Label-level behavior on representative reference-table labels.

use cip_dose::{PackageSource, aggregate, explode, parse_label};
use cip_model::{ComboDose, Form, LabelFacts};

fn close(actual: Option<f64>, expected: f64) {
    let value = actual.unwrap_or_else(|| panic!("expected {expected}, got None"));
    assert!(
        (value - expected).abs() < 1e-9,
        "expected {expected}, got {value}"
    );
}

fn package(label: &str, quantity: Option<f64>) -> cip_model::PackageRecord {
    let source = PackageSource {
        label: Some(label.to_string()),
        quantity,
        ..PackageSource::default()
    };
    aggregate(source, parse_label(label))
}

#[test]
fn gastro_resistant_tablet() {
    let facts = parse_label("ESOMEPRAZOLE 20 MG CPR GASTRORESISTANT 14");
    assert_eq!(facts.form, Some(Form::Tablet));
    assert_eq!(facts.dose_per_unit_mg, Some(20.0));
    assert_eq!(facts.combo, None);
    assert_eq!(facts.units_from_label, Some(14));
}

#[test]
fn interferon_pen() {
    let facts = parse_label("AVONEX 30 MCG/0,5 ML SOL INJ STYLO 4/0,5 ML");
    close(facts.dose_per_unit_mg, 0.015);
    close(facts.concentration_mg_per_ml, 0.03);
    close(facts.unit_volume_ml, 0.5);
}

#[test]
fn valsartan_combination() {
    let facts = parse_label("VALSARTAN/HYDROCHLOROTHIAZIDE 80 MG/12,5 MG CPR 30");
    assert_eq!(facts.combo, Some(ComboDose::new(80.0, 12.5)));
    assert_eq!(facts.units_from_label, Some(30));

    let record = package("VALSARTAN/HYDROCHLOROTHIAZIDE 80 MG/12,5 MG CPR 30", None);
    assert_eq!(record.total_dose_mg, None);
    let components: Vec<_> = explode(&record).collect();
    let rows: Vec<_> = components
        .iter()
        .map(|c| (c.component_index, c.dose_per_unit_mg_component))
        .collect();
    assert_eq!(rows, vec![(1, Some(80.0)), (2, Some(12.5))]);
}

#[test]
fn label_without_any_fact() {
    let record = package("COMPRESSE STERILE", None);
    assert_eq!(parse_label("COMPRESSE STERILE"), LabelFacts::default());
    assert_eq!(record.form, None);
    assert_eq!(record.dose_per_unit_mg, None);
    assert_eq!(record.total_dose_mg, None);
    assert_eq!(record.dose_summary, None);
    assert_eq!(explode(&record).count(), 1);
}

#[test]
fn explicit_quantity_overrides_trailing_count() {
    let record = package("ESOMEPRAZOLE 20 MG CPR GASTRORESISTANT 14", Some(28.0));
    assert_eq!(record.units_per_pack, Some(28.0));
    assert_eq!(record.total_dose_mg, Some(560.0));
    assert_eq!(record.dose_summary.as_deref(), Some("20.00 mg × 28"));
}

#[test]
fn gram_strength_sachet() {
    let record = package("AMOXICILLINE 1 G SACHET 12", None);
    assert_eq!(record.form, Some(Form::Sachet));
    assert_eq!(record.dose_per_unit_mg, Some(1000.0));
    assert_eq!(record.total_dose_mg, Some(12_000.0));
}
