//! Module records produced by the extractor and appended to destinations.

use serde::{Deserialize, Serialize};

use crate::schema::{ATTRIBUTE_COLUMNS, COLUMN_COUNT};
use crate::DocumentNumber;

/// Result of a keyed attribute lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Text found next to the key, trimmed.
    Text(String),
    /// The configurator wrote `NA`; stored as the literal `None`.
    NotApplicable,
    /// Key absent, or nothing usable next to it.
    Missing,
}

impl AttributeValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn to_cell(&self) -> CellValue {
        match self {
            Self::Text(value) => CellValue::Text(value.clone()),
            Self::NotApplicable => CellValue::Text("None".to_string()),
            Self::Missing => CellValue::Integer(0),
        }
    }
}

/// One value in a destination row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Empty,
}

impl CellValue {
    /// Text rendering used for comparisons and plain-text exports.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Empty => String::new(),
        }
    }
}

/// One extracted product module, ready to append to a destination table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub document_number: DocumentNumber,
    pub module_code: String,
    pub quantity: Option<i64>,
    pub length_mm: Option<i64>,
    /// Values in [`ATTRIBUTE_COLUMNS`] order.
    pub attributes: Vec<AttributeValue>,
    pub creation_date: String,
    pub delivery_date: String,
    pub customer: String,
}

impl ModuleRecord {
    /// Serialize into the 33-column destination layout.
    ///
    /// A missing quantity stays an empty cell; a missing length or attribute
    /// becomes `0`.
    pub fn to_row(&self) -> Vec<CellValue> {
        let mut row = Vec::with_capacity(COLUMN_COUNT);
        row.push(CellValue::Text(self.document_number.to_string()));
        row.push(CellValue::Text(self.module_code.clone()));
        row.push(match self.quantity {
            Some(quantity) => CellValue::Integer(quantity),
            None => CellValue::Empty,
        });
        row.push(CellValue::Integer(self.length_mm.unwrap_or(0)));
        row.extend(self.attributes.iter().map(AttributeValue::to_cell));
        // keep the layout fixed even for hand-built records
        row.extend(
            std::iter::repeat(CellValue::Integer(0))
                .take(ATTRIBUTE_COLUMNS.len().saturating_sub(self.attributes.len())),
        );
        row.push(CellValue::Text(self.creation_date.clone()));
        row.push(CellValue::Text(self.delivery_date.clone()));
        row.push(CellValue::Text(self.customer.clone()));
        row
    }
}
