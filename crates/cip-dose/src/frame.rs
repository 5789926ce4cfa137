//! Conversion of normalized records into output DataFrames.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use cip_model::columns::{
    COMBO_A, COMBO_B, COMPONENT_DOSE_PER_UNIT, COMPONENT_INDEX, COMPONENT_TOTAL_DOSE,
    CONCENTRATION, DOSE_PER_UNIT, DOSE_SUMMARY, EPHMRA, FORM, LABO, LIB_CIP, LIB_UCD, TOTAL_DOSE,
    UNIT_VOLUME, UNITS_PER_PACK,
};
use cip_model::{Form, IdentifierColumn, PackageRecord};

use crate::error::Result;
use crate::pipeline::NormalizedTables;

/// Builds the package table.
///
/// Identifier and passthrough columns appear only when the source had them.
pub fn packages_frame(tables: &NormalizedTables) -> Result<DataFrame> {
    let layout = &tables.layout;
    let packages = &tables.packages;
    let mut columns = Vec::new();

    for column in &layout.identifiers {
        let values: Vec<&str> = packages
            .iter()
            .map(|p| p.identifiers.get(*column))
            .collect();
        push_column(&mut columns, Series::new(column.column_name().into(), values));
    }
    if layout.has_laboratory {
        let values: Vec<Option<&str>> = packages.iter().map(|p| p.laboratory.as_deref()).collect();
        push_column(&mut columns, Series::new(LABO.into(), values));
    }
    if layout.has_ephmra {
        let values: Vec<Option<&str>> =
            packages.iter().map(|p| p.ephmra_class.as_deref()).collect();
        push_column(&mut columns, Series::new(EPHMRA.into(), values));
    }
    let labels: Vec<Option<&str>> = packages.iter().map(|p| p.label.as_deref()).collect();
    push_column(
        &mut columns,
        Series::new(layout.label_column.as_str().into(), labels),
    );

    let forms: Vec<Option<&str>> = packages.iter().map(|p| p.form.map(Form::as_str)).collect();
    push_column(&mut columns, Series::new(FORM.into(), forms));

    let numeric: [(&str, fn(&PackageRecord) -> Option<f64>); 7] = [
        (UNITS_PER_PACK, |p| p.units_per_pack),
        (DOSE_PER_UNIT, |p| p.dose_per_unit_mg),
        (TOTAL_DOSE, |p| p.total_dose_mg),
        (CONCENTRATION, |p| p.concentration_mg_per_ml),
        (UNIT_VOLUME, |p| p.unit_volume_ml),
        (COMBO_A, PackageRecord::combo_a_mg),
        (COMBO_B, PackageRecord::combo_b_mg),
    ];
    for (name, read) in numeric {
        let values: Vec<Option<f64>> = packages.iter().map(read).collect();
        push_column(&mut columns, Series::new(name.into(), values));
    }

    let summaries: Vec<Option<&str>> =
        packages.iter().map(|p| p.dose_summary.as_deref()).collect();
    push_column(&mut columns, Series::new(DOSE_SUMMARY.into(), summaries));

    Ok(DataFrame::new(columns)?)
}

/// Builds the component table.
///
/// All columns are always present. `LIB_UCD` and `LIB_CIP` are both kept; a
/// label column outside those two follows them.
pub fn components_frame(tables: &NormalizedTables) -> Result<DataFrame> {
    let components = &tables.components;
    let mut columns = Vec::new();

    for column in IdentifierColumn::ALL {
        let values: Vec<&str> = components
            .iter()
            .map(|c| c.identifiers.get(column))
            .collect();
        push_column(&mut columns, Series::new(column.column_name().into(), values));
    }
    let ucd_labels: Vec<Option<&str>> = components
        .iter()
        .map(|c| c.reference_labels.ucd.as_deref())
        .collect();
    push_column(&mut columns, Series::new(LIB_UCD.into(), ucd_labels));
    let cip_labels: Vec<Option<&str>> = components
        .iter()
        .map(|c| c.reference_labels.cip.as_deref())
        .collect();
    push_column(&mut columns, Series::new(LIB_CIP.into(), cip_labels));
    let labels: Vec<Option<&str>> = components.iter().map(|c| c.label.as_deref()).collect();
    push_column(
        &mut columns,
        Series::new(tables.layout.label_column.as_str().into(), labels),
    );
    let laboratories: Vec<Option<&str>> =
        components.iter().map(|c| c.laboratory.as_deref()).collect();
    push_column(&mut columns, Series::new(LABO.into(), laboratories));
    let classes: Vec<Option<&str>> = components
        .iter()
        .map(|c| c.ephmra_class.as_deref())
        .collect();
    push_column(&mut columns, Series::new(EPHMRA.into(), classes));

    let forms: Vec<Option<&str>> = components
        .iter()
        .map(|c| c.form.map(Form::as_str))
        .collect();
    push_column(&mut columns, Series::new(FORM.into(), forms));

    let units: Vec<Option<f64>> = components.iter().map(|c| c.units_per_pack).collect();
    push_column(&mut columns, Series::new(UNITS_PER_PACK.into(), units));
    let concentrations: Vec<Option<f64>> = components
        .iter()
        .map(|c| c.concentration_mg_per_ml)
        .collect();
    push_column(&mut columns, Series::new(CONCENTRATION.into(), concentrations));
    let volumes: Vec<Option<f64>> = components.iter().map(|c| c.unit_volume_ml).collect();
    push_column(&mut columns, Series::new(UNIT_VOLUME.into(), volumes));

    let indices: Vec<u32> = components.iter().map(|c| c.component_index).collect();
    push_column(&mut columns, Series::new(COMPONENT_INDEX.into(), indices));
    let doses: Vec<Option<f64>> = components
        .iter()
        .map(|c| c.dose_per_unit_mg_component)
        .collect();
    push_column(&mut columns, Series::new(COMPONENT_DOSE_PER_UNIT.into(), doses));
    let totals: Vec<Option<f64>> = components
        .iter()
        .map(|c| c.total_dose_mg_component)
        .collect();
    push_column(&mut columns, Series::new(COMPONENT_TOTAL_DOSE.into(), totals));

    Ok(DataFrame::new(columns)?)
}

/// Appends a column unless one with the same name is already there.
///
/// The fallback label column can coincide with a passthrough column; the
/// first occurrence is kept.
fn push_column(columns: &mut Vec<Column>, series: Series) {
    if columns.iter().all(|c| c.name() != series.name()) {
        columns.push(series.into_column());
    }
}
