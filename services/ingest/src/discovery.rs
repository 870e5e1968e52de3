//! Source Discovery
//!
//! Lists configurator exports in the configured source directories.

use std::path::{Path, PathBuf};

use conveyor_ledger_utils::LedgerError;

/// Exports found across all directories, plus one error per unreadable directory.
pub fn discover_exports(directories: &[PathBuf], extension: &str) -> (Vec<PathBuf>, Vec<LedgerError>) {
    let mut files = Vec::new();
    let mut errors = Vec::new();

    for directory in directories {
        match list_directory(directory, extension) {
            Ok(found) => {
                tracing::debug!(directory = %directory.display(), count = found.len(), "Listed exports");
                files.extend(found);
            }
            Err(e) => {
                tracing::warn!(error = %e, directory = %directory.display(), "Skipping unreadable directory");
                errors.push(e);
            }
        }
    }

    files.sort();
    (files, errors)
}

/// Plain file names in `directory`, sorted
pub fn file_names(directory: &Path) -> Result<Vec<String>, LedgerError> {
    let entries = std::fs::read_dir(directory)
        .map_err(|e| LedgerError::file_access(directory.display().to_string(), e.to_string()))?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names)
}

fn list_directory(directory: &Path, extension: &str) -> Result<Vec<PathBuf>, LedgerError> {
    Ok(file_names(directory)?
        .into_iter()
        .filter(|name| name.ends_with(extension))
        .map(|name| directory.join(name))
        .collect())
}
