//! Basic metrics instrumentation for normalization runs.
//!
//! Provides counters for processed lines and per-kind line failures.

use crate::error::ParseError;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for one or more normalization runs.
#[derive(Debug, Clone)]
pub struct PipelineMetrics {
    /// Total number of input lines processed
    lines_total: Arc<AtomicU64>,

    /// Lines that produced a record
    records_accepted: Arc<AtomicU64>,

    /// Lines rejected for a wrong token count
    malformed_entries: Arc<AtomicU64>,

    /// Lines rejected because a field category had no token
    missing_fields: Arc<AtomicU64>,
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            lines_total: Arc::new(AtomicU64::new(0)),
            records_accepted: Arc::new(AtomicU64::new(0)),
            malformed_entries: Arc::new(AtomicU64::new(0)),
            missing_fields: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a line that produced a record.
    pub fn record_accepted(&self) {
        self.lines_total.fetch_add(1, Ordering::Relaxed);
        self.records_accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed line, counted by failure kind.
    pub fn record_failure(&self, error: &ParseError) {
        self.lines_total.fetch_add(1, Ordering::Relaxed);
        let counter = match error {
            ParseError::MalformedEntry { .. } => &self.malformed_entries,
            ParseError::MissingField(_) => &self.missing_fields,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lines_total(&self) -> u64 {
        self.lines_total.load(Ordering::Relaxed)
    }

    pub fn records_accepted(&self) -> u64 {
        self.records_accepted.load(Ordering::Relaxed)
    }

    /// Get total failed lines across all kinds.
    pub fn lines_failed(&self) -> u64 {
        self.malformed_entries.load(Ordering::Relaxed)
            + self.missing_fields.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            lines_total: self.lines_total(),
            records_accepted: self.records_accepted(),
            malformed_entries: self.malformed_entries.load(Ordering::Relaxed),
            missing_fields: self.missing_fields.load(Ordering::Relaxed),
        }
    }

    /// Log a summary at info level.
    pub fn log_summary(&self) {
        let summary = self.summary();
        tracing::info!(
            lines_total = summary.lines_total,
            records_accepted = summary.records_accepted,
            malformed_entries = summary.malformed_entries,
            missing_fields = summary.missing_fields,
            "Normalization run summary"
        );
    }
}

/// Snapshot of pipeline counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub lines_total: u64,
    pub records_accepted: u64,
    pub malformed_entries: u64,
    pub missing_fields: u64,
}
