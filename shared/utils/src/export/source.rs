//! Source File Metadata
//!
//! Values that come from the export's file name and file system entry rather
//! than from its contents.

use chrono::{DateTime, Local};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";

/// Customer name is the last `_`-separated part of the file name.
pub fn customer_from_file_name(file_name: &str) -> String {
    let last = file_name.rsplit('_').next().unwrap_or(file_name);
    let customer = last.replace(".csv", "");
    let customer = customer.trim();

    if customer.is_empty() {
        UNKNOWN_CUSTOMER.to_string()
    } else {
        customer.to_string()
    }
}

/// Creation timestamp of the file, falling back to its modification time.
pub fn creation_time(path: &Path) -> LedgerResult<DateTime<Local>> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| LedgerError::file_access(path.display().to_string(), e.to_string()))?;

    let time = metadata
        .created()
        .or_else(|_| metadata.modified())
        .map_err(|e| LedgerError::file_access(path.display().to_string(), e.to_string()))?;

    Ok(DateTime::<Local>::from(time))
}

pub fn creation_date(path: &Path, format: &str) -> LedgerResult<String> {
    Ok(creation_time(path)?.format(format).to_string())
}
