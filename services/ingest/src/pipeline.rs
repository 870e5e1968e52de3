//! Ingestion Pipeline
//!
//! Classifies each discovered export, skips documents already recorded,
//! extracts the rest and appends one batch per destination table.

use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;
use std::time::Instant;
use uuid::Uuid;

use conveyor_ledger_database::RecordStore;
use conveyor_ledger_models::{DocumentKind, ModuleRecord};
use conveyor_ledger_utils::{Classification, ExportParser, FailureReport, LedgerError, LoadedExport};

use crate::progress::{Progress, ProgressReporter};

/// A file or directory that could not be processed
#[derive(Debug, Clone, Serialize)]
pub struct SkippedSource {
    pub source: String,
    #[serde(flatten)]
    pub failure: FailureReport,
}

/// Outcome of one ingestion run
#[derive(Debug, Clone, Serialize)]
pub struct IngestSummary {
    pub run_id: Uuid,
    pub files_discovered: usize,
    pub files_extracted: usize,
    pub duplicates: usize,
    pub unrecognized: usize,
    pub failures: Vec<SkippedSource>,
    pub appended: BTreeMap<String, usize>,
}

impl IngestSummary {
    pub fn new(run_id: Uuid, files_discovered: usize) -> Self {
        Self {
            run_id,
            files_discovered,
            files_extracted: 0,
            duplicates: 0,
            unrecognized: 0,
            failures: Vec::new(),
            appended: BTreeMap::new(),
        }
    }

    pub fn record_failure(&mut self, source: impl Into<String>, error: &LedgerError) {
        self.failures.push(SkippedSource {
            source: source.into(),
            failure: FailureReport::from(error),
        });
    }

    pub fn total_appended(&self) -> usize {
        self.appended.values().sum()
    }
}

pub struct IngestPipeline<'a, S: RecordStore> {
    parser: ExportParser,
    date_format: String,
    store: &'a mut S,
}

impl<'a, S: RecordStore> IngestPipeline<'a, S> {
    pub fn new(parser: ExportParser, date_format: impl Into<String>, store: &'a mut S) -> Self {
        Self {
            parser,
            date_format: date_format.into(),
            store,
        }
    }

    /// Process `files` in order and append the new records.
    ///
    /// Per-file failures are logged and counted; store and configuration errors abort the run.
    pub fn run(
        &mut self,
        run_id: Uuid,
        files: &[PathBuf],
        reporter: &mut dyn ProgressReporter,
    ) -> Result<IngestSummary> {
        let started = Instant::now();
        let mut summary = IngestSummary::new(run_id, files.len());

        if !files.is_empty() {
            self.store.ensure_tables()?;
        }

        let mut seen: HashMap<DocumentKind, HashSet<String>> = HashMap::new();
        for kind in DocumentKind::ALL {
            seen.insert(kind, self.store.read_existing_identifiers(kind)?);
        }

        let mut batches: HashMap<DocumentKind, Vec<ModuleRecord>> = HashMap::new();

        for (idx, path) in files.iter().enumerate() {
            match LoadedExport::load(&self.parser, path, &self.date_format) {
                Ok(export) => self.collect(&export, &mut seen, &mut batches, &mut summary),
                Err(e) if e.is_file_scoped() => {
                    tracing::error!(error = %e, path = %path.display(), "Failed to read export");
                    summary.record_failure(path.display().to_string(), &e);
                }
                Err(e) => return Err(e.into()),
            }

            reporter.on_file_processed(&Progress {
                processed: idx + 1,
                total: files.len(),
                elapsed: started.elapsed(),
            });
        }

        for kind in DocumentKind::ALL {
            let Some(records) = batches.get(&kind).filter(|records| !records.is_empty()) else {
                continue;
            };
            self.store.append_records(kind, records)?;
            summary.appended.insert(kind.sheet_name().to_string(), records.len());
        }

        Ok(summary)
    }

    fn collect(
        &self,
        export: &LoadedExport,
        seen: &mut HashMap<DocumentKind, HashSet<String>>,
        batches: &mut HashMap<DocumentKind, Vec<ModuleRecord>>,
        summary: &mut IngestSummary,
    ) {
        let (kind, number) = match &export.classification {
            Classification::Recognized { kind, number } => (*kind, number),
            Classification::Unrecognized(first_cell) => {
                tracing::debug!(
                    path = %export.path.display(),
                    first_cell = %first_cell,
                    "Export is neither order nor quotation, skipping"
                );
                summary.unrecognized += 1;
                return;
            }
        };

        // also guards against the same document appearing twice in one run
        if !seen.entry(kind).or_default().insert(number.to_string()) {
            tracing::debug!(document = %number, table = kind.sheet_name(), "Already recorded, skipping");
            summary.duplicates += 1;
            return;
        }

        let records = export.records();
        tracing::info!(
            document = %number,
            kind = %kind,
            modules = records.len(),
            customer = %export.customer,
            "Extracted export"
        );
        summary.files_extracted += 1;
        batches.entry(kind).or_default().extend(records);
    }
}
