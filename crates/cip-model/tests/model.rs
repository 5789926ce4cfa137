//! Tests for cip-model types.

use cip_model::{
    ComboDose, Form, IdentifierColumn, Identifiers, NormalizationReport, PackageRecord,
    ReferenceLabels,
};

fn package(combo: Option<ComboDose>) -> PackageRecord {
    PackageRecord {
        identifiers: Identifiers::default(),
        label: Some("VALSARTAN/HYDROCHLOROTHIAZIDE 80 MG/12,5 MG CPR 30".to_string()),
        reference_labels: ReferenceLabels::default(),
        laboratory: None,
        ephmra_class: None,
        quantity_raw: None,
        form: Some(Form::Tablet),
        dose_per_unit_mg: Some(80.0),
        concentration_mg_per_ml: None,
        unit_volume_ml: None,
        combo,
        units_per_pack: Some(30.0),
        total_dose_mg: None,
        dose_summary: None,
    }
}

#[test]
fn default_identifiers_are_zero_filled() {
    let ids = Identifiers::default();
    for column in IdentifierColumn::ALL {
        let value = ids.get(column);
        assert_eq!(value.len(), column.width());
        assert!(value.chars().all(|ch| ch == '0'));
    }
}

#[test]
fn identifiers_set_updates_only_target_column() {
    let mut ids = Identifiers::default();
    ids.set(IdentifierColumn::Cip7, "3400930".to_string());
    assert_eq!(ids.cip7, "3400930");
    assert_eq!(ids.cip13, "0000000000000");
}

#[test]
fn combo_accessors_are_joint() {
    let combo = package(Some(ComboDose::new(80.0, 12.5)));
    assert_eq!(combo.combo_a_mg(), Some(80.0));
    assert_eq!(combo.combo_b_mg(), Some(12.5));
    assert!(combo.is_combo());

    let single = package(None);
    assert_eq!(single.combo_a_mg(), None);
    assert_eq!(single.combo_b_mg(), None);
}

#[test]
fn form_serializes_kebab_case() {
    let json = serde_json::to_string(&Form::PreFilledPen).expect("serialize form");
    assert_eq!(json, "\"pre-filled-pen\"");
}

#[test]
fn report_serializes() {
    let mut report = NormalizationReport {
        label_column: "LIB_UCD".to_string(),
        packages: 2,
        ..NormalizationReport::default()
    };
    report.identifier_overflows.insert("CIP7".to_string(), 1);
    assert!(report.has_identifier_overflows());
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: NormalizationReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
}
