//! Source Reconciliation
//!
//! Cross-checks source directories against the recorded document numbers and
//! reports files that no destination row accounts for.

use std::collections::HashSet;
use std::path::Path;

use conveyor_ledger_utils::LedgerResult;

use crate::discovery::file_names;

/// File names in `directory` that contain none of `identifiers`.
pub fn unmatched_files(directory: &Path, identifiers: &HashSet<String>) -> LedgerResult<Vec<String>> {
    Ok(file_names(directory)?
        .into_iter()
        .filter(|name| !identifiers.iter().any(|id| name.contains(id.as_str())))
        .collect())
}

/// Log the reconciliation result for one directory; returns the unmatched count.
pub fn report_directory(directory: &Path, identifiers: &HashSet<String>) -> LedgerResult<usize> {
    tracing::info!(directory = %directory.display(), "Checking files against recorded documents");

    let unmatched = unmatched_files(directory, identifiers)?;
    if unmatched.is_empty() {
        tracing::info!(directory = %directory.display(), "All files correspond to recorded documents");
    } else {
        tracing::error!(
            directory = %directory.display(),
            files = ?unmatched,
            "Files without a recorded document number"
        );
    }
    Ok(unmatched.len())
}
