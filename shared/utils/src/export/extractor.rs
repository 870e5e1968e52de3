//! Module Record Extractor
//!
//! Scans an export for module rows and assembles one record per module.

use conveyor_ledger_models::{DocumentNumber, ModuleRecord, ATTRIBUTE_COLUMNS};

use super::length::resolve_length;
use super::lookup::lookup;
use super::parser::ParsedFile;

/// Prefix that marks a module code in column 2.
pub const MODULE_PREFIX: &str = "AT-";

const MODULE_COLUMN: usize = 2;
const QUANTITY_COLUMN: usize = 3;
const DELIVERY_DATE_COLUMN: usize = 8;

/// Per-file values copied onto every record.
#[derive(Debug, Clone)]
pub struct ExtractionContext {
    pub document_number: DocumentNumber,
    pub creation_date: String,
    pub customer: String,
}

/// A module row found by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRow<'a> {
    pub index: usize,
    pub code: &'a str,
    pub quantity: Option<i64>,
    pub delivery_date: String,
}

/// Rows whose third cell starts with [`MODULE_PREFIX`], in file order.
pub fn scan_modules(file: &ParsedFile) -> impl Iterator<Item = ModuleRow<'_>> {
    file.rows().iter().enumerate().filter_map(|(index, row)| {
        let code = row.get(MODULE_COLUMN)?.trim();
        if code.is_empty() || !code.starts_with(MODULE_PREFIX) {
            return None;
        }

        Some(ModuleRow {
            index,
            code,
            quantity: row.get(QUANTITY_COLUMN).and_then(|raw| parse_quantity(raw)),
            delivery_date: row
                .get(DELIVERY_DATE_COLUMN)
                .map(|raw| raw.trim().replace('.', "/"))
                .unwrap_or_default(),
        })
    })
}

/// Extract every module record from a classified export.
pub fn extract_records(file: &ParsedFile, context: &ExtractionContext) -> Vec<ModuleRecord> {
    scan_modules(file)
        .map(|module| ModuleRecord {
            document_number: context.document_number.clone(),
            module_code: module.code.to_string(),
            quantity: module.quantity,
            length_mm: resolve_length(file, module.index, module.code),
            attributes: ATTRIBUTE_COLUMNS
                .iter()
                .map(|key| lookup(file, module.index, *key))
                .collect(),
            creation_date: context.creation_date.clone(),
            delivery_date: module.delivery_date,
            customer: context.customer.clone(),
        })
        .collect()
}

/// All-digit text only; signs, decimals and blanks leave the quantity unset.
fn parse_quantity(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
