//! End-to-end runs over a small export.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use cip_cli::commands::run;
use cip_cli::summary::{form_table, summary_table};
use cip_cli::types::RunConfig;
use cip_model::{NormalizationReport, OutputFormat};

const EXPORT: &str = "Export CIP/UCD\n\
CodeCIP13;CodeCIP;CodeUCD13;CodeUCD;LibelleUCD;Laboratoire;Qte;EphMRA\n\
3400930000001.0;3000001;3400890000001;9000001;ESOMEPRAZOLE 20 MG CPR GASTRORESISTANT 14;LAB A;28;A02B\n\
3400930000002;3000002;3400890000002;9000002;VALSARTAN/HYDROCHLOROTHIAZIDE 80 MG/12,5 MG CPR 30;LAB B;;C09D\n\
3400930000003;3000003;3400890000003;9000003;AVONEX 30 MCG/0,5 ML SOL INJ STYLO 4/0,5 ML;LAB C;4;L03A\n";

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("CIP_UCD.csv");
    fs::write(&source, EXPORT).unwrap();
    (dir, source)
}

#[test]
fn csv_run_writes_tables_and_report() {
    let (dir, source) = setup();
    let report_path = dir.path().join("reports/run.json");
    let config = RunConfig {
        outdir: dir.path().join("out"),
        format: OutputFormat::Csv,
        report_path: Some(report_path.clone()),
        parallel: false,
        ..RunConfig::new(&source)
    };

    let result = run(&config).unwrap();
    assert_eq!(result.source_rows, 3);
    assert_eq!(result.report.packages, 3);
    assert_eq!(result.report.components, 4);
    assert_eq!(result.report.combos, 1);

    let outputs = result.outputs.as_ref().unwrap();
    assert_eq!(outputs.format, OutputFormat::Csv);
    let packages = fs::read_to_string(&outputs.packages).unwrap();
    let header = packages.lines().next().unwrap();
    assert!(header.starts_with("CIP13,CIP7,UCD13,UCD7,LABO,EPHMRA,LIB_UCD,forme"));
    assert!(packages.contains("3400930000001,"));
    assert!(packages.contains("80.00 mg + 12.50 mg × 30"));

    let json = fs::read_to_string(&report_path).unwrap();
    let report: NormalizationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, result.report);
    assert_eq!(report.source_sha256.as_ref().map(String::len), Some(64));
}

#[test]
fn dry_run_writes_nothing() {
    let (dir, source) = setup();
    let outdir = dir.path().join("out");
    let config = RunConfig {
        outdir: outdir.clone(),
        dry_run: true,
        ..RunConfig::new(&source)
    };

    let result = run(&config).unwrap();
    assert!(result.outputs.is_none());
    assert!(!outdir.exists());
}

#[test]
fn missing_label_column_fails() {
    let (_dir, source) = setup();
    let config = RunConfig {
        dry_run: true,
        label_column: Some("LIB_X".to_string()),
        ..RunConfig::new(&source)
    };
    let err = run(&config).unwrap_err();
    assert!(format!("{err:#}").contains("LIB_X"));
}

#[test]
fn missing_source_fails() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig {
        dry_run: true,
        ..RunConfig::new(dir.path().join("absent.csv"))
    };
    assert!(run(&config).is_err());
}

#[test]
fn summary_tables_list_counts() {
    let (_dir, source) = setup();
    let config = RunConfig {
        dry_run: true,
        ..RunConfig::new(&source)
    };
    let result = run(&config).unwrap();

    let summary = summary_table(&result).to_string();
    assert!(summary.contains("Packages"));
    assert!(summary.contains("Combinations"));
    assert!(summary.contains("LIB_UCD"));

    let forms = form_table(&result).to_string();
    assert!(forms.contains("tablet"));
    assert!(forms.contains("solution"));
}
