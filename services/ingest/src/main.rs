//! Conveyor Ledger Ingestion
//!
//! Reads configurator exports from the source directories and appends the
//! module records of every new order or quotation to the destination workbook.

use anyhow::{Context, Result};
use std::collections::HashSet;
use uuid::Uuid;

mod discovery;
mod pipeline;
mod progress;
mod reconcile;

use conveyor_ledger_database::{RecordStore, WorkbookRepository};
use conveyor_ledger_models::DocumentKind;
use conveyor_ledger_utils::{init_logging, AppConfig, ExportParser};

use discovery::discover_exports;
use pipeline::IngestPipeline;
use progress::LogProgress;

fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("ingest", run_id = %run_id);
    let _guard = span.enter();

    tracing::info!(
        directories = config.source.directories.len(),
        workbook = %config.destination.workbook_path.display(),
        "Starting Conveyor Ledger ingestion"
    );

    let parser = ExportParser::new().with_legacy_encoding(&config.source.legacy_encoding)?;
    let mut store = WorkbookRepository::new(&config.destination.workbook_path);

    let (files, directory_errors) = discover_exports(&config.source.directories, &config.source.extension);
    if files.is_empty() {
        tracing::warn!("No export files found in the source directories");
    }

    let mut summary = IngestPipeline::new(parser, config.ingest.creation_date_format.clone(), &mut store)
        .run(run_id, &files, &mut LogProgress)?;
    for error in &directory_errors {
        summary.record_failure("source directory", error);
    }

    if config.ingest.verify_after_run {
        let mut recorded = HashSet::new();
        for kind in DocumentKind::ALL {
            recorded.extend(store.read_existing_identifiers(kind)?);
        }
        for directory in &config.source.directories {
            if let Err(e) = reconcile::report_directory(directory, &recorded) {
                tracing::warn!(error = %e, directory = %directory.display(), "Reconciliation skipped");
            }
        }
    }

    tracing::info!(
        summary = %serde_json::to_string(&summary)?,
        "Ingestion finished: {} records appended",
        summary.total_appended()
    );
    Ok(())
}
