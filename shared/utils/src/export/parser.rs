//! Export File Parser
//!
//! Reads semicolon-delimited configurator exports into a ragged cell grid.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

/// Rows of text cells exactly as they appear in the export, no header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    rows: Vec<Vec<String>>,
}

impl ParsedFile {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parser for configurator exports
pub struct ExportParser {
    delimiter: u8,
    legacy_encoding: &'static Encoding,
}

impl Default for ExportParser {
    fn default() -> Self {
        Self {
            delimiter: b';',
            legacy_encoding: WINDOWS_1252,
        }
    }
}

impl ExportParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the encoding named by `label` for files that are not UTF-8.
    pub fn with_legacy_encoding(mut self, label: &str) -> LedgerResult<Self> {
        self.legacy_encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| LedgerError::configuration(format!("Unknown encoding label: {}", label)))?;
        Ok(self)
    }

    /// Read and parse an export from disk
    pub fn parse_path(&self, path: &Path) -> LedgerResult<ParsedFile> {
        let data = std::fs::read(path)
            .map_err(|e| LedgerError::file_access(path.display().to_string(), e.to_string()))?;
        self.parse_bytes(&path.display().to_string(), &data)
    }

    /// Parse an export from raw bytes
    pub fn parse_bytes(&self, filename: &str, data: &[u8]) -> LedgerResult<ParsedFile> {
        let text = self.decode(filename, data);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result
                .map_err(|e| LedgerError::parse(filename, format!("Row {}: {}", idx + 1, e)))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(ParsedFile { rows })
    }

    fn decode(&self, filename: &str, data: &[u8]) -> String {
        let (decoded, _, had_errors) = UTF_8.decode(data);
        if !had_errors {
            return decoded.into_owned();
        }

        let (decoded, _, _) = self.legacy_encoding.decode(data);
        tracing::debug!(
            file = filename,
            encoding = self.legacy_encoding.name(),
            "Decoded export with legacy encoding"
        );
        decoded.into_owned()
    }
}
