//! Document identity for configurator export files.
//!
//! Every export file names one sales document in its first cell. The leading
//! digit tells orders from quotations, and the same token keys deduplication
//! against rows already stored in the destination workbook.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Destination a classified export belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Order,
    Quotation,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Order, DocumentKind::Quotation];

    /// Classify a trimmed document token by its leading digit.
    pub fn from_leading_digit(token: &str) -> Option<Self> {
        match token.chars().next()? {
            '5' => Some(Self::Order),
            '2' => Some(Self::Quotation),
            _ => None,
        }
    }

    /// Worksheet that stores records of this kind.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Self::Order => "Sales Orders",
            Self::Quotation => "Quotations",
        }
    }

    /// Display name of the styled table inside the worksheet.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Order => "SalesOrdersTable",
            Self::Quotation => "QuotationsTable",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order => write!(f, "order"),
            Self::Quotation => write!(f, "quotation"),
        }
    }
}

/// Strip spurious trailing `.0` suffixes left behind by numeric coercion.
///
/// Only the exact suffix is removed, so `"500100"` stays intact.
pub fn normalize_document_number(raw: &str) -> &str {
    let mut number = raw.trim();
    while let Some(stripped) = number.strip_suffix(".0") {
        number = stripped;
    }
    number
}

/// A document number as read from an export file, kept in normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentNumber(String);

impl DocumentNumber {
    pub fn new(raw: &str) -> Self {
        Self(normalize_document_number(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_leading_digit(&self.0)
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocumentNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_leading_digit() {
        assert_eq!(DocumentKind::from_leading_digit("500123"), Some(DocumentKind::Order));
        assert_eq!(DocumentKind::from_leading_digit("2001"), Some(DocumentKind::Quotation));
        assert_eq!(DocumentKind::from_leading_digit("999999"), None);
        assert_eq!(DocumentKind::from_leading_digit(""), None);
    }

    #[test]
    fn test_normalize_strips_coerced_suffix() {
        assert_eq!(normalize_document_number("123456.0"), "123456");
        assert_eq!(normalize_document_number("123456.0.0"), "123456");
        assert_eq!(normalize_document_number("123456"), "123456");
        assert_eq!(normalize_document_number(" 500100 "), "500100");
        assert_eq!(normalize_document_number("500100.5"), "500100.5");
    }

    #[test]
    fn test_document_number_is_normalized_on_construction() {
        let number = DocumentNumber::new("500123.0");
        assert_eq!(number.as_str(), "500123");
        assert_eq!(number.kind(), Some(DocumentKind::Order));
        assert_eq!(DocumentNumber::new("500123"), number);
    }
}
