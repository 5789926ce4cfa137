//! Integration tests for table export.

use std::fs::{self, File};

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, ParquetReader, SerReader, Series};
use tempfile::TempDir;

use cip_model::OutputFormat;
use cip_output::{OutputError, OutputOptions, write_outputs};

fn packages() -> DataFrame {
    DataFrame::new(vec![
        Series::new("CIP13".into(), vec!["3400930000001", "3400930000002"]).into_column(),
        Series::new("dose_par_unite_mg".into(), vec![Some(20.0), None]).into_column(),
        Series::new("DOSE".into(), vec![Some("20.00 mg × 14"), None]).into_column(),
    ])
    .unwrap()
}

fn components() -> DataFrame {
    DataFrame::new(vec![
        Series::new("CIP13".into(), vec!["3400930000001"]).into_column(),
        Series::new("component_index".into(), vec![1u32]).into_column(),
    ])
    .unwrap()
}

#[test]
fn parquet_outputs_round_trip() {
    let dir = TempDir::new().unwrap();
    let outdir = dir.path().join("out");
    let paths = write_outputs(&packages(), &components(), &outdir, &OutputOptions::default())
        .unwrap();

    assert_eq!(paths.format, OutputFormat::Parquet);
    assert_eq!(paths.packages, outdir.join("cip13_norm.parquet"));
    assert_eq!(paths.components, outdir.join("cip13_components.parquet"));

    let read = ParquetReader::new(File::open(&paths.packages).unwrap())
        .finish()
        .unwrap();
    assert!(read.equals_missing(&packages()));
}

#[test]
fn csv_outputs_on_request() {
    let dir = TempDir::new().unwrap();
    let options = OutputOptions::default().with_format(OutputFormat::Csv);
    let paths = write_outputs(&packages(), &components(), dir.path(), &options).unwrap();

    assert_eq!(paths.format, OutputFormat::Csv);
    let text = fs::read_to_string(&paths.packages).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("CIP13,dose_par_unite_mg,DOSE"));
    let first = lines.next().unwrap();
    assert!(first.starts_with("3400930000001,20"));
    assert!(first.ends_with(",20.00 mg × 14"));
    assert!(!dir.path().join("cip13_norm.parquet").exists());

    let components = fs::read_to_string(&paths.components).unwrap();
    assert!(components.starts_with("CIP13,component_index"));
}

#[test]
fn unwritable_outdir_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"x").unwrap();
    let err = write_outputs(
        &packages(),
        &components(),
        &blocker.join("out"),
        &OutputOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, OutputError::CreateDir { .. }));
}

#[test]
fn parquet_failure_falls_back_to_csv() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("cip13_norm.parquet")).unwrap();

    let paths = write_outputs(
        &packages(),
        &components(),
        dir.path(),
        &OutputOptions::default(),
    )
    .unwrap();

    assert_eq!(paths.format, OutputFormat::Csv);
    assert_eq!(paths.packages, dir.path().join("cip13_norm.csv"));
    assert_eq!(paths.components, dir.path().join("cip13_components.csv"));
    assert!(paths.packages.is_file());
    assert!(paths.components.is_file());
    assert!(!dir.path().join("cip13_components.parquet").exists());
}

#[test]
fn failed_component_parquet_removes_package_parquet() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("cip13_components.parquet")).unwrap();

    let paths = write_outputs(
        &packages(),
        &components(),
        dir.path(),
        &OutputOptions::default(),
    )
    .unwrap();

    assert_eq!(paths.format, OutputFormat::Csv);
    assert!(!dir.path().join("cip13_norm.parquet").exists());
    assert!(paths.packages.is_file());
    assert!(paths.components.is_file());
}
