//! Column names of the source table and of the two output tables.

pub const LIB_UCD: &str = "LIB_UCD";
pub const LIB_CIP: &str = "LIB_CIP";
pub const LABO: &str = "LABO";
pub const EPHMRA: &str = "EPHMRA";
pub const QTE: &str = "QTE";

/// Label columns in order of preference.
pub const LABEL_CANDIDATES: [&str; 2] = [LIB_UCD, LIB_CIP];

pub const FORM: &str = "forme";
pub const UNITS_PER_PACK: &str = "nb_unites_par_boite";
pub const DOSE_PER_UNIT: &str = "dose_par_unite_mg";
pub const TOTAL_DOSE: &str = "dose_totale_boite_mg";
pub const CONCENTRATION: &str = "conc_mg_per_ml";
pub const UNIT_VOLUME: &str = "unit_volume_ml";
pub const COMBO_A: &str = "combo_a_mg";
pub const COMBO_B: &str = "combo_b_mg";
pub const DOSE_SUMMARY: &str = "DOSE";

pub const COMPONENT_INDEX: &str = "component_index";
pub const COMPONENT_DOSE_PER_UNIT: &str = "dose_par_unite_mg_component";
pub const COMPONENT_TOTAL_DOSE: &str = "dose_totale_boite_mg_component";
