//! In-Memory Repository
//!
//! Keeps destination rows in memory. Used for dry runs and tests.

use anyhow::Result;
use std::collections::{HashMap, HashSet};

use conveyor_ledger_models::{normalize_document_number, CellValue, DocumentKind, ModuleRecord};

use crate::RecordStore;

#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    tables: HashMap<DocumentKind, Vec<Vec<CellValue>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table with rows whose first cell is the given identifier
    pub fn with_identifiers(mut self, kind: DocumentKind, identifiers: &[&str]) -> Self {
        let rows = self.tables.entry(kind).or_default();
        for id in identifiers {
            rows.push(vec![CellValue::Text(id.to_string())]);
        }
        self
    }

    pub fn rows(&self, kind: DocumentKind) -> &[Vec<CellValue>] {
        self.tables.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl RecordStore for MemoryRepository {
    fn read_existing_identifiers(&self, kind: DocumentKind) -> Result<HashSet<String>> {
        Ok(self
            .rows(kind)
            .iter()
            .filter_map(|row| row.first())
            .map(|cell| normalize_document_number(&cell.as_text()).to_string())
            .filter(|id| !id.is_empty())
            .collect())
    }

    fn ensure_tables(&mut self) -> Result<()> {
        for kind in DocumentKind::ALL {
            self.tables.entry(kind).or_default();
        }
        Ok(())
    }

    fn append_records(&mut self, kind: DocumentKind, records: &[ModuleRecord]) -> Result<()> {
        self.tables
            .entry(kind)
            .or_default()
            .extend(records.iter().map(ModuleRecord::to_row));
        Ok(())
    }
}
