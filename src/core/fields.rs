//! Which pathway CSV columns get special treatment in the HTML report.

pub const PATHWAY_ID_FIELD: &str = "Pathway identifier";
pub const PATHWAY_NAME_FIELD: &str = "Pathway name";

pub const NUMERIC_FIELDS: [&str; 4] = [
    "Entities ratio",
    "Entities pValue",
    "Entities FDR",
    "Reactions ratio",
];

pub const FIELDS_TO_SKIP: [&str; 3] = [
    "Submitted entities found",
    "Mapped entities",
    "Found reaction identifiers",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Linked to the pathway browser and followed by a diagram column.
    PathwayName,
    Numeric,
    Skipped,
    Plain,
}

pub fn classify(header: &str) -> FieldKind {
    if header == PATHWAY_NAME_FIELD {
        FieldKind::PathwayName
    } else if FIELDS_TO_SKIP.contains(&header) {
        FieldKind::Skipped
    } else if NUMERIC_FIELDS.contains(&header) {
        FieldKind::Numeric
    } else {
        FieldKind::Plain
    }
}
