//! In-memory record of a controller's state assignments.
//!
//! The trace is runtime observability, not persistence: it lets a host dump
//! what a controller has been doing (crash reports, AI debugging overlays)
//! and never crosses a process restart. Records serialize so they can be
//! attached to whatever reporting channel the host already has.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One state assignment, as seen by the controller that performed it.
///
/// `from`/`to` are state names rather than ids so a record stays readable
/// without the graph at hand. `None` on either side is the inactive
/// controller (before initialization, or after a deactivating transition).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// State active before the assignment, if any.
    pub from: Option<String>,
    /// State active after the assignment, if any.
    pub to: Option<String>,
    /// When the assignment happened.
    pub timestamp: DateTime<Utc>,
    /// Whether the target was reached through the previous-state sentinel.
    pub via_previous: bool,
}

/// Ordered trace of assignments, oldest first.
///
/// Every assignment is recorded, including re-entries whose hooks were
/// suppressed — the controller's fields were still reassigned. The trace
/// grows without bound; long-running hosts should [`clear`](Self::clear) it
/// at whatever cadence suits their reporting.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionTrace {
    records: Vec<TraceRecord>,
}

impl TransitionTrace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, record: TraceRecord) {
        self.records.push(record);
    }

    /// All records in order.
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.last()
    }

    /// The sequence of state names traversed: the first record's origin,
    /// then each destination. `None` entries are inactive periods.
    pub fn path(&self) -> Vec<Option<&str>> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_deref());
        }
        for record in &self.records {
            path.push(record.to.as_deref());
        }
        path
    }

    /// Elapsed time between the first and last record.
    ///
    /// `None` when the trace is empty; zero when it holds a single record.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of recorded assignments.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records, keeping the allocation.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
