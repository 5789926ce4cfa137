//! Free-text label parsing.
//!
//! Labels of the reference table look like
//! `ESOMEPRAZOLE 20 MG CPR GASTRORESISTANT 14` or
//! `AVONEX 30 MCG/0,5 ML SOL INJ STYLO 4/0,5 ML`. There is no fixed grammar,
//! so extraction is an ordered set of pattern rules applied to the upper-cased
//! label:
//!
//! 1. **Form**: first whole-word token of [`FORM_TOKENS`] present in the label.
//! 2. **Fallback unit count**: trailing integer of the label.
//! 3. **Dose tokens**: every `<number><unit>` with a mass or `ML` unit.
//! 4. **Concentration × volume**: `<number><mass>/ML` (also written
//!    `<number><mass>/<volume> ML`, the mass being read per mL) together with
//!    a trailing `/<number>ML`, for liquid forms only.
//! 5. **Single dose**: first mass token, when rule 4 did not apply.
//! 6. **Combination**: `<number><mass>/<number><mass>`, reported as is.
//!
//! [`parse_label`] never fails; a rule that does not match leaves its field
//! empty.

use std::sync::LazyLock;

use regex::Regex;

use cip_common::{parse_decimal, parse_i64};
use cip_model::{ComboDose, Form, LabelFacts};

/// Whole-word form tokens, in match priority order.
pub const FORM_TOKENS: &[(&str, Form)] = &[
    ("CPR", Form::Tablet),
    ("SEC", Form::ScoredTablet),
    ("GEL", Form::Capsule),
    ("CAPSULE", Form::Capsule),
    ("COLLYRE", Form::EyeDrop),
    ("SOL", Form::Solution),
    ("INJ", Form::Injection),
    ("PATCH", Form::Patch),
    ("FL", Form::Vial),
    ("STYLO", Form::PreFilledPen),
    ("SUSP", Form::Suspension),
    ("SIROP", Form::Syrup),
    ("SACHET", Form::Sachet),
];

static FORM_PATTERNS: LazyLock<Vec<(Regex, Form)>> = LazyLock::new(|| {
    FORM_TOKENS
        .iter()
        .map(|(token, form)| {
            let pattern = format!(r"\b{}\b", regex::escape(token));
            (Regex::new(&pattern).expect("Invalid form token regex"), *form)
        })
        .collect()
});

static TRAILING_COUNT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*$").expect("Invalid trailing count regex"));

// `µ` upper-cases to the Greek capital mu, so both spellings are listed.
static DOSE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:[.,][0-9]+)?)\s*(MCG|µG|ΜG|MG|G|ML)").expect("Invalid dose token regex")
});

static CONCENTRATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:[.,][0-9]+)?)\s*(MCG|µG|ΜG|MG|G)\s*/\s*(?:[0-9]+(?:[.,][0-9]+)?\s*)?ML")
        .expect("Invalid concentration regex")
});

static TRAILING_VOLUME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\s*([0-9,.]+)\s*ML\s*$").expect("Invalid trailing volume regex")
});

static COMBO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([0-9]+(?:[.,][0-9]+)?)\s*(MG|G|MCG|µG|ΜG)\s*/\s*([0-9]+(?:[.,][0-9]+)?)\s*(MG|G|MCG|µG|ΜG)",
    )
    .expect("Invalid combination regex")
});

/// A `<number><unit>` occurrence in a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoseToken {
    /// Mass already converted to milligrams.
    Mass(f64),
    /// Volume in millilitres.
    Volume(f64),
}

/// Converts a value in the given mass unit to milligrams.
///
/// Returns `None` for units that are not masses.
pub fn to_mg(value: f64, unit: &str) -> Option<f64> {
    match unit {
        "MG" => Some(value),
        "G" => Some(value * 1000.0),
        "MCG" | "µG" | "ΜG" => Some(value / 1000.0),
        _ => None,
    }
}

/// Parses one label into its fact bundle.
///
/// # Examples
///
/// ```
/// use cip_dose::parse_label;
/// use cip_model::Form;
///
/// let facts = parse_label("ESOMEPRAZOLE 20 MG CPR GASTRORESISTANT 14");
/// assert_eq!(facts.form, Some(Form::Tablet));
/// assert_eq!(facts.dose_per_unit_mg, Some(20.0));
/// assert_eq!(facts.units_from_label, Some(14));
/// ```
pub fn parse_label(label: &str) -> LabelFacts {
    let upper = label.to_uppercase();

    let form = detect_form(&upper);
    let units_from_label = trailing_count(&upper);
    let concentration_mg_per_ml = concentration(&upper);
    let unit_volume_ml = trailing_volume(&upper);

    let volumetric_dose = match (form, concentration_mg_per_ml, unit_volume_ml) {
        (Some(form), Some(conc), Some(volume)) if form.is_volumetric() => Some(conc * volume),
        _ => None,
    };
    let dose_per_unit_mg = volumetric_dose.or_else(|| first_mass_mg(&upper));

    LabelFacts {
        form,
        dose_per_unit_mg,
        concentration_mg_per_ml,
        unit_volume_ml,
        combo: combination(&upper),
        units_from_label,
    }
}

/// First form token found in an upper-cased label.
pub fn detect_form(upper: &str) -> Option<Form> {
    FORM_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(upper))
        .map(|(_, form)| *form)
}

/// Integer at the very end of the label, if any.
pub fn trailing_count(upper: &str) -> Option<i64> {
    let captures = TRAILING_COUNT_REGEX.captures(upper)?;
    parse_i64(captures.get(1)?.as_str())
}

/// Every dose or volume token of the label, in label order.
pub fn dose_tokens(upper: &str) -> Vec<DoseToken> {
    DOSE_TOKEN_REGEX
        .captures_iter(upper)
        .filter_map(|captures| {
            let value = parse_decimal(captures.get(1)?.as_str())?;
            let unit = captures.get(2)?.as_str();
            if unit == "ML" {
                Some(DoseToken::Volume(value))
            } else {
                to_mg(value, unit).map(DoseToken::Mass)
            }
        })
        .collect()
}

fn first_mass_mg(upper: &str) -> Option<f64> {
    dose_tokens(upper).into_iter().find_map(|token| match token {
        DoseToken::Mass(mg) => Some(mg),
        DoseToken::Volume(_) => None,
    })
}

fn concentration(upper: &str) -> Option<f64> {
    let captures = CONCENTRATION_REGEX.captures(upper)?;
    let value = parse_decimal(captures.get(1)?.as_str())?;
    to_mg(value, captures.get(2)?.as_str())
}

fn trailing_volume(upper: &str) -> Option<f64> {
    let captures = TRAILING_VOLUME_REGEX.captures(upper)?;
    parse_decimal(captures.get(1)?.as_str())
}

fn combination(upper: &str) -> Option<ComboDose> {
    let captures = COMBO_REGEX.captures(upper)?;
    let a_mg = to_mg(
        parse_decimal(captures.get(1)?.as_str())?,
        captures.get(2)?.as_str(),
    )?;
    let b_mg = to_mg(
        parse_decimal(captures.get(3)?.as_str())?,
        captures.get(4)?.as_str(),
    )?;
    Some(ComboDose::new(a_mg, b_mg))
}
