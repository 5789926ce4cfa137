//! Integration tests for reading reference exports from disk.

use std::io::Write;

use polars::prelude::AnyValue;
use tempfile::NamedTempFile;

use cip_ingest::{IngestError, IngestOptions, SourceEncoding, read_cip_ucd};

const EXPORT: &str = "Liste des presentations\r\n\
Mise a jour : 2024-01-01\r\n\
CodeCIP13;CodeCIP;CodeUCD13;CodeUCD;LibelleUCD;Laboratoire;Qte;EphMRA\r\n\
3400930000001;3000001;3400890000001;9000001;ESOMEPRAZOLE 20 MG CPR GASTRORESISTANT 14;LAB A;28;A02B\r\n\
3400930000002;3000002;3400890000002;9000002;AVONEX 30 MCG/0,5 ML SOL INJ STYLO 4/0,5 ML;LAB B;;L03A\r\n";

fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    bytes
}

fn temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file
}

#[test]
fn reads_utf16_export_with_preamble() {
    let file = temp_file(&utf16le_with_bom(EXPORT));
    let source = read_cip_ucd(file.path(), &IngestOptions::default()).unwrap();

    assert_eq!(source.header_row, 2);
    assert_eq!(source.encoding, "UTF-16LE");
    assert_eq!(source.sha256.len(), 64);

    let names: Vec<&str> = source
        .data
        .get_column_names()
        .iter()
        .map(|n| n.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["CIP13", "CIP7", "UCD13", "UCD7", "LIB_UCD", "LABO", "QTE", "EPHMRA"]
    );
    assert_eq!(source.data.height(), 2);

    let qte = source.data.column("QTE").unwrap();
    assert_eq!(qte.get(0).unwrap(), AnyValue::String("28"));
    assert_eq!(qte.get(1).unwrap(), AnyValue::Null);
    let label = source.data.column("LIB_UCD").unwrap();
    assert_eq!(
        label.get(1).unwrap(),
        AnyValue::String("AVONEX 30 MCG/0,5 ML SOL INJ STYLO 4/0,5 ML")
    );
}

#[test]
fn reads_utf8_export() {
    let file = temp_file(EXPORT.as_bytes());
    let source = read_cip_ucd(file.path(), &IngestOptions::default()).unwrap();
    assert_eq!(source.encoding, "UTF-8");
    assert_eq!(source.data.height(), 2);
}

#[test]
fn same_bytes_give_same_digest() {
    let a = temp_file(EXPORT.as_bytes());
    let b = temp_file(EXPORT.as_bytes());
    let options = IngestOptions::default();
    let first = read_cip_ucd(a.path(), &options).unwrap();
    let second = read_cip_ucd(b.path(), &options).unwrap();
    assert_eq!(first.sha256, second.sha256);
}

#[test]
fn custom_separator() {
    let file = temp_file(b"CodeCIP13,LibelleCIP\n3400930000001,X 5 MG CPR 10\n");
    let options = IngestOptions::default()
        .with_separator(b',')
        .with_encoding(SourceEncoding::Utf8);
    let source = read_cip_ucd(file.path(), &options).unwrap();
    assert_eq!(source.header_row, 0);
    assert!(source.data.column("LIB_CIP").is_ok());
}

#[test]
fn empty_file_is_rejected() {
    let file = temp_file(b"\n  \n");
    let err = read_cip_ucd(file.path(), &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyFile { .. }));
}

#[test]
fn oversized_file_is_rejected() {
    let file = temp_file(EXPORT.as_bytes());
    let options = IngestOptions::default().with_max_file_size(16);
    let err = read_cip_ucd(file.path(), &options).unwrap_err();
    assert!(matches!(err, IngestError::FileTooLarge { .. }));
}
