//! Export Loader
//!
//! Reads one export from disk and gathers everything extraction needs.

use conveyor_ledger_models::{DocumentKind, DocumentNumber, ModuleRecord};
use std::path::{Path, PathBuf};

use super::classifier::{classify, Classification};
use super::extractor::{extract_records, ExtractionContext};
use super::parser::{ExportParser, ParsedFile};
use super::source::{creation_date, customer_from_file_name};
use crate::error::LedgerResult;

/// A parsed export with its classification and file-level metadata.
#[derive(Debug, Clone)]
pub struct LoadedExport {
    pub path: PathBuf,
    pub file: ParsedFile,
    pub classification: Classification,
    pub customer: String,
    pub creation_date: String,
}

impl LoadedExport {
    pub fn load(parser: &ExportParser, path: &Path, date_format: &str) -> LedgerResult<Self> {
        let file = parser.parse_path(path)?;
        let classification = classify(&file);
        let customer = path
            .file_name()
            .map(|name| customer_from_file_name(&name.to_string_lossy()))
            .unwrap_or_else(|| customer_from_file_name(""));
        let creation_date = creation_date(path, date_format)?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            classification,
            customer,
            creation_date,
        })
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        match &self.classification {
            Classification::Recognized { kind, .. } => Some(*kind),
            Classification::Unrecognized(_) => None,
        }
    }

    pub fn document_number(&self) -> Option<&DocumentNumber> {
        match &self.classification {
            Classification::Recognized { number, .. } => Some(number),
            Classification::Unrecognized(_) => None,
        }
    }

    /// Module records for a recognized export; empty for an unrecognized one.
    pub fn records(&self) -> Vec<ModuleRecord> {
        let Some(number) = self.document_number() else {
            return Vec::new();
        };

        let context = ExtractionContext {
            document_number: number.clone(),
            creation_date: self.creation_date.clone(),
            customer: self.customer.clone(),
        };
        extract_records(&self.file, &context)
    }
}
