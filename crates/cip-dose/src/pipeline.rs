//! Table-level normalization run.
//!
//! The run is a single forward pass:
//! 1. **Identifiers**: rewrite identifier columns, coerce `QTE`
//! 2. **Parse + aggregate**: one [`PackageRecord`] per source row
//! 3. **Explode**: one [`ComponentRecord`] per active ingredient
//!
//! Stages 2 and 3 run on the rayon pool unless disabled in
//! [`NormalizeOptions`]; output order always follows input order.

use std::time::Instant;

use polars::prelude::DataFrame;
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use cip_model::columns::{EPHMRA, LABEL_CANDIDATES, LABO, LIB_CIP, LIB_UCD, QTE};
use cip_model::{
    ComponentRecord, IdentifierColumn, Identifiers, NormalizationReport, PackageRecord,
    ReferenceLabels,
};

use crate::components::explode_all;
use crate::dose::{PackageSource, aggregate};
use crate::error::{NormalizeError, Result};
use crate::frame_utils::{has_column, numeric_column_f64, optional_column, raw_string_column};
use crate::identifiers::normalize_ids;
use crate::label::parse_label;
use crate::options::NormalizeOptions;

/// Which source columns fed the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub identifiers: Vec<IdentifierColumn>,
    pub label_column: String,
    pub has_laboratory: bool,
    pub has_ephmra: bool,
}

/// Result of [`normalize_table`].
#[derive(Debug, Clone)]
pub struct NormalizedTables {
    pub layout: SourceLayout,
    pub packages: Vec<PackageRecord>,
    pub components: Vec<ComponentRecord>,
    pub report: NormalizationReport,
}

/// Picks the column holding the free-text label.
///
/// Preference: explicit option, `LIB_UCD`, `LIB_CIP`, then the last column of
/// a table that has at least one identifier column.
pub fn select_label_column(df: &DataFrame, options: &NormalizeOptions) -> Result<String> {
    if let Some(column) = &options.label_column {
        if has_column(df, column) {
            return Ok(column.clone());
        }
        return Err(NormalizeError::LabelColumn {
            column: column.clone(),
        });
    }
    if let Some(column) = LABEL_CANDIDATES
        .into_iter()
        .find(|name| has_column(df, name))
    {
        return Ok(column.to_string());
    }
    let has_identifier = IdentifierColumn::ALL
        .iter()
        .any(|column| has_column(df, column.column_name()));
    let names = df.get_column_names();
    match names.last() {
        Some(last) if has_identifier => Ok(last.to_string()),
        _ => Err(NormalizeError::MissingColumns {
            found: names
                .iter()
                .map(|name| name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

/// Normalizes a source table into package and component records.
///
/// The input frame is not modified.
pub fn normalize_table(df: &DataFrame, options: &NormalizeOptions) -> Result<NormalizedTables> {
    let span = info_span!("normalize", rows = df.height());
    let _guard = span.enter();
    let start = Instant::now();

    let label_column = select_label_column(df, options)?;
    debug!(label_column = %label_column, "label column selected");

    let mut table = df.clone();
    let id_summary = normalize_ids(&mut table, options.parallel)?;

    let sources = package_sources(&table, &id_summary.normalized, &label_column)?;
    let packages: Vec<PackageRecord> = if options.parallel {
        sources.into_par_iter().map(build_package).collect()
    } else {
        sources.into_iter().map(build_package).collect()
    };
    let components = explode_all(&packages, options.parallel);

    let layout = SourceLayout {
        identifiers: id_summary.normalized,
        label_column,
        has_laboratory: has_column(df, LABO),
        has_ephmra: has_column(df, EPHMRA),
    };
    let mut report = build_report(&packages, components.len(), &layout.label_column);
    report.identifier_overflows = id_summary
        .overflows
        .iter()
        .map(|(column, count)| (column.column_name().to_string(), *count))
        .collect();

    info!(
        packages = report.packages,
        components = report.components,
        combos = report.combos,
        without_summary = report.without_summary,
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );

    Ok(NormalizedTables {
        layout,
        packages,
        components,
        report,
    })
}

fn build_package(source: PackageSource) -> PackageRecord {
    let facts = source
        .label
        .as_deref()
        .map(parse_label)
        .unwrap_or_default();
    aggregate(source, facts)
}

fn package_sources(
    table: &DataFrame,
    identifiers: &[IdentifierColumn],
    label_column: &str,
) -> Result<Vec<PackageSource>> {
    let height = table.height();
    let mut id_values = Vec::with_capacity(identifiers.len());
    for column in identifiers {
        id_values.push((*column, raw_string_column(table, column.column_name())?));
    }
    let labels = raw_string_column(table, label_column)?;
    let laboratories = optional_column(table, LABO, raw_string_column)?;
    let classes = optional_column(table, EPHMRA, raw_string_column)?;
    let ucd_labels = optional_column(table, LIB_UCD, raw_string_column)?;
    let cip_labels = optional_column(table, LIB_CIP, raw_string_column)?;
    let quantities = optional_column(table, QTE, numeric_column_f64)?;

    let mut sources = Vec::with_capacity(height);
    for idx in 0..height {
        let mut ids = Identifiers::default();
        for (column, values) in &id_values {
            if let Some(value) = &values[idx] {
                ids.set(*column, value.clone());
            }
        }
        sources.push(PackageSource {
            identifiers: ids,
            label: labels[idx].clone(),
            reference_labels: ReferenceLabels {
                ucd: ucd_labels[idx].clone(),
                cip: cip_labels[idx].clone(),
            },
            laboratory: laboratories[idx].clone(),
            ephmra_class: classes[idx].clone(),
            quantity: quantities[idx],
        });
    }
    Ok(sources)
}

fn build_report(
    packages: &[PackageRecord],
    components: usize,
    label_column: &str,
) -> NormalizationReport {
    let mut report = NormalizationReport {
        label_column: label_column.to_string(),
        packages: packages.len(),
        components,
        ..NormalizationReport::default()
    };
    for package in packages {
        if package.is_combo() {
            report.combos += 1;
        }
        if package.dose_summary.is_none() {
            report.without_summary += 1;
        }
        match package.form {
            Some(form) => *report.forms.entry(form.as_str().to_string()).or_insert(0) += 1,
            None => report.without_form += 1,
        }
    }
    report
}
