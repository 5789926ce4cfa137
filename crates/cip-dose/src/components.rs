//! Expansion of packages into one record per active ingredient.

use rayon::prelude::*;

use cip_model::{ComponentRecord, PackageRecord};

/// Component records of one package: two for a combination, one otherwise.
pub fn explode(package: &PackageRecord) -> impl Iterator<Item = ComponentRecord> + '_ {
    let doses: Vec<(Option<f64>, Option<f64>)> = match package.combo {
        Some(combo) => combo
            .components()
            .into_iter()
            .map(|dose| (Some(dose), package.units_per_pack.map(|units| dose * units)))
            .collect(),
        None => vec![(package.dose_per_unit_mg, package.total_dose_mg)],
    };
    doses
        .into_iter()
        .zip(1u32..)
        .map(move |((dose, total), index)| component(package, index, dose, total))
}

/// Explodes every package, keeping package order and component order.
pub fn explode_all(packages: &[PackageRecord], parallel: bool) -> Vec<ComponentRecord> {
    if parallel {
        packages.par_iter().flat_map_iter(explode).collect()
    } else {
        packages.iter().flat_map(explode).collect()
    }
}

fn component(
    package: &PackageRecord,
    component_index: u32,
    dose_per_unit_mg_component: Option<f64>,
    total_dose_mg_component: Option<f64>,
) -> ComponentRecord {
    ComponentRecord {
        identifiers: package.identifiers.clone(),
        label: package.label.clone(),
        reference_labels: package.reference_labels.clone(),
        laboratory: package.laboratory.clone(),
        ephmra_class: package.ephmra_class.clone(),
        form: package.form,
        units_per_pack: package.units_per_pack,
        concentration_mg_per_ml: package.concentration_mg_per_ml,
        unit_volume_ml: package.unit_volume_ml,
        component_index,
        dose_per_unit_mg_component,
        total_dose_mg_component,
    }
}
