//! Document Classifier
//!
//! Decides which destination an export belongs to from its first cell.

use conveyor_ledger_models::{DocumentKind, DocumentNumber};

use super::parser::ParsedFile;

/// Outcome of classifying an export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Recognized {
        kind: DocumentKind,
        number: DocumentNumber,
    },
    /// First cell missing or not starting with a known digit; carries the trimmed text.
    Unrecognized(String),
}

impl Classification {
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Recognized { .. })
    }
}

/// Classify a parsed export by cell [0][0]. Pure: no other cell is read.
pub fn classify(file: &ParsedFile) -> Classification {
    let first = file.cell(0, 0).map(str::trim).unwrap_or_default();

    match DocumentKind::from_leading_digit(first) {
        Some(kind) => Classification::Recognized {
            kind,
            number: DocumentNumber::new(first),
        },
        None => Classification::Unrecognized(first.to_string()),
    }
}
