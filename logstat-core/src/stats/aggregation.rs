use crate::stats::histogram::StatusHistogram;
use crate::stats::types::{LogRecord, TrackedStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Running totals for one run of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateState {
    total_bytes: u64,
    status_counts: StatusHistogram,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one extraction result into the totals.
    ///
    /// Bytes always count. The status only counts when it is in the
    /// tracked set.
    pub fn push(&mut self, record: Option<&LogRecord>) {
        let Some(record) = record else {
            return;
        };

        self.total_bytes = self.total_bytes.saturating_add(record.byte_size);

        if let Some(status) = TrackedStatus::from_token(&record.status_code) {
            self.status_counts.record(status);
        }
    }

    pub fn extend<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a LogRecord>,
    {
        for record in records {
            self.push(Some(record));
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn status_counts(&self) -> &StatusHistogram {
        &self.status_counts
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            file_size: self.total_bytes,
            status_codes: self
                .status_counts
                .non_zero()
                .map(|(status, count)| (status.as_str(), count))
                .collect(),
        }
    }
}

/// Point-in-time view of the aggregates, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub file_size: u64,
    /// Only non-zero counters, keyed and ordered by status token.
    pub status_codes: BTreeMap<&'static str, u64>,
}
