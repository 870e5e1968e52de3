//! Progress reporting for ingestion runs.

use std::time::Duration;

/// Snapshot handed to a reporter after each file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
    pub elapsed: Duration,
}

impl Progress {
    /// Average time per processed file times the files left; `None` until one file is done.
    pub fn estimated_remaining(&self) -> Option<Duration> {
        if self.processed == 0 {
            return None;
        }
        let remaining = self.total.saturating_sub(self.processed);
        Some(self.elapsed.mul_f64(remaining as f64 / self.processed as f64))
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.processed as f64 * 100.0 / self.total as f64
        }
    }
}

pub trait ProgressReporter {
    fn on_file_processed(&mut self, progress: &Progress);
}

/// Reports progress through the log.
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn on_file_processed(&mut self, progress: &Progress) {
        let remaining = progress
            .estimated_remaining()
            .map(format_duration)
            .unwrap_or_else(|| "calculating...".to_string());

        tracing::info!(
            processed = progress.processed,
            total = progress.total,
            elapsed = %format_duration(progress.elapsed),
            remaining = %remaining,
            "Files read: {} of {} ({:.0}%)",
            progress.processed,
            progress.total,
            progress.percent()
        );
    }
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}m {}s", secs / 60, secs % 60)
}
