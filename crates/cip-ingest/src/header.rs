//! Header row detection and column naming.

/// Export column names and the names used downstream.
pub const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("CodeCIP13", "CIP13"),
    ("CodeCIP", "CIP7"),
    ("CodeUCD13", "UCD13"),
    ("CodeUCD", "UCD7"),
    ("LibelleUCD", "LIB_UCD"),
    ("LibelleCIP", "LIB_CIP"),
    ("Laboratoire", "LABO"),
    ("Qte", "QTE"),
    ("EphMRA", "EPHMRA"),
];

/// Index of the first line, among the first `probe` lines, that contains both
/// the marker and the separator. Defaults to the first line.
pub fn detect_header_row(text: &str, marker: &str, separator: char, probe: usize) -> usize {
    text.lines()
        .take(probe)
        .position(|line| line.contains(marker) && line.contains(separator))
        .unwrap_or(0)
}

/// Trimmed, renamed column name. Blank headers are named after their position.
pub fn canonical_column_name(raw: &str, index: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return format!("column_{}", index + 1);
    }
    COLUMN_RENAMES
        .iter()
        .find(|(from, _)| *from == trimmed)
        .map_or_else(|| trimmed.to_string(), |(_, to)| (*to).to_string())
}

/// Canonical names for a whole header record; repeated names get a numeric suffix.
pub fn canonical_headers<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for (index, header) in raw.into_iter().enumerate() {
        let base = canonical_column_name(header, index);
        let mut name = base.clone();
        let mut suffix = 2;
        while names.contains(&name) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }
        names.push(name);
    }
    names
}
