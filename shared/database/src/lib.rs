pub mod repositories;

pub use repositories::*;

use anyhow::Result;
use std::collections::HashSet;

use conveyor_ledger_models::{DocumentKind, ModuleRecord};

/// Destination for extracted module records, one table per document kind.
pub trait RecordStore {
    /// Normalized document numbers already present in the table's first column.
    fn read_existing_identifiers(&self, kind: DocumentKind) -> Result<HashSet<String>>;

    /// Create any missing table so every document kind has one, with its header row.
    fn ensure_tables(&mut self) -> Result<()>;

    /// Append rows in the given order. No reordering and no deduplication.
    fn append_records(&mut self, kind: DocumentKind, records: &[ModuleRecord]) -> Result<()>;
}
