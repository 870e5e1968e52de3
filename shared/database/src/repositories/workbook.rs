//! Workbook Repository
//!
//! Destination tables stored as worksheets of one `.xlsx` workbook. Each
//! sheet holds a header row followed by module records, wrapped in a styled
//! table whose range grows with every append.

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, DataType, Reader};
use std::collections::HashSet;
use std::path::PathBuf;
use umya_spreadsheet::structs::{Spreadsheet, Table, TableColumn, TableStyleInfo, Worksheet};

use conveyor_ledger_models::{header_row, normalize_document_number, CellValue, DocumentKind, ModuleRecord};

use crate::RecordStore;

const TABLE_STYLE: &str = "TableStyleMedium9";

pub struct WorkbookRepository {
    path: PathBuf,
}

impl WorkbookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the workbook, or start an empty one when the file does not exist yet
    fn open_for_write(&self) -> Result<Spreadsheet> {
        if self.path.exists() {
            umya_spreadsheet::reader::xlsx::read(&self.path)
                .map_err(|e| anyhow!("{:?}", e))
                .with_context(|| format!("Failed to open workbook {}", self.path.display()))
        } else {
            tracing::info!(path = %self.path.display(), "Creating new destination workbook");
            Ok(umya_spreadsheet::new_file_empty_worksheet())
        }
    }

    fn save(&self, book: &Spreadsheet) -> Result<()> {
        umya_spreadsheet::writer::xlsx::write(book, &self.path)
            .map_err(|e| anyhow!("{:?}", e))
            .with_context(|| format!("Failed to save workbook {}", self.path.display()))
    }
}

impl RecordStore for WorkbookRepository {
    fn read_existing_identifiers(&self, kind: DocumentKind) -> Result<HashSet<String>> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }

        let mut workbook = open_workbook_auto(&self.path)
            .with_context(|| format!("Failed to open workbook {}", self.path.display()))?;

        let sheet_name = kind.sheet_name();
        if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
            return Ok(HashSet::new());
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .context("Failed to read worksheet")??;

        // First row is headers
        let identifiers = range
            .rows()
            .skip(1)
            .filter_map(|row| row.first())
            .filter(|cell| !matches!(cell, DataType::Empty))
            .map(|cell| normalize_document_number(&cell.to_string()).to_string())
            .filter(|number| !number.is_empty())
            .collect();

        Ok(identifiers)
    }

    fn ensure_tables(&mut self) -> Result<()> {
        let existed = self.path.exists();
        let mut book = self.open_for_write()?;

        if add_missing_sheets(&mut book)? || !existed {
            self.save(&book)?;
        }
        Ok(())
    }

    fn append_records(&mut self, kind: DocumentKind, records: &[ModuleRecord]) -> Result<()> {
        let mut book = self.open_for_write()?;
        add_missing_sheets(&mut book)?;

        let sheet_name = kind.sheet_name();
        let sheet = book
            .get_sheet_by_name_mut(sheet_name)
            .with_context(|| format!("Sheet {} disappeared", sheet_name))?;

        let mut row_num = sheet.get_highest_row() + 1;
        for record in records {
            write_row(sheet, row_num, &record.to_row());
            row_num += 1;
        }
        extend_tables(sheet, kind);

        self.save(&book)?;

        tracing::info!(
            table = sheet_name,
            appended = records.len(),
            path = %self.path.display(),
            "Appended records to workbook"
        );
        Ok(())
    }
}

/// Create every destination sheet the workbook lacks, each with its header
/// row and styled table. Returns whether anything was added.
fn add_missing_sheets(book: &mut Spreadsheet) -> Result<bool> {
    let mut added = false;
    for kind in DocumentKind::ALL {
        let sheet_name = kind.sheet_name();
        if book.get_sheet_by_name(sheet_name).is_some() {
            continue;
        }

        let sheet = book
            .new_sheet(sheet_name)
            .map_err(|e| anyhow!("Failed to create sheet {}: {}", sheet_name, e))?;
        write_header(sheet, kind);
        extend_tables(sheet, kind);
        tracing::debug!(table = sheet_name, "Created destination sheet");
        added = true;
    }
    Ok(added)
}

fn write_header(sheet: &mut Worksheet, kind: DocumentKind) {
    for (idx, caption) in header_row(kind).iter().enumerate() {
        sheet.get_cell_mut((idx as u32 + 1, 1)).set_value(*caption);
    }
}

fn write_row(sheet: &mut Worksheet, row_num: u32, cells: &[CellValue]) {
    for (idx, value) in cells.iter().enumerate() {
        let cell = sheet.get_cell_mut((idx as u32 + 1, row_num));
        match value {
            CellValue::Text(text) => {
                cell.set_value(text.as_str());
            }
            CellValue::Integer(number) => {
                cell.set_value_number(*number as f64);
            }
            CellValue::Empty => {}
        }
    }
}

/// Stretch every table on the sheet to cover the data, adding one if none exists
fn extend_tables(sheet: &mut Worksheet, kind: DocumentKind) {
    let last_col = sheet.get_highest_column();
    let last_row = sheet.get_highest_row();

    if sheet.get_tables_mut().is_empty() {
        let mut table = Table::new(kind.table_name(), ((1, 1), (last_col, last_row)));
        for caption in header_row(kind) {
            table.add_column(TableColumn::new(caption));
        }
        table.set_style_info(Some(TableStyleInfo::new(TABLE_STYLE, false, false, true, true)));
        sheet.add_table(table);
        return;
    }

    for table in sheet.get_tables_mut().iter_mut() {
        table.set_area(((1, 1), (last_col, last_row)));
    }
}
