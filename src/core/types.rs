//! Core data types shared by the reader, aggregator and selector

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::RecordError;

/// One log line with both fields present and trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRecord {
    pub(crate) line: u64,
    pub(crate) cookie: String,
    pub(crate) timestamp: String,
}

/// Cookie occurrence counts for the target date
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct CounterTable {
    counts: HashMap<String, u64>,
}

impl CounterTable {
    pub(crate) fn record(&mut self, cookie: &str) {
        // avoid allocating a key for cookies already seen
        if let Some(count) = self.counts.get_mut(cookie) {
            *count += 1;
        } else {
            self.counts.insert(cookie.to_string(), 1);
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, cookie: &str) -> u64 {
        self.counts.get(cookie).copied().unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of matched records
    #[cfg(test)]
    pub(crate) fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for CounterTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Knobs for a single scan
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ScanOptions {
    /// Fail on records newer than their predecessor instead of trusting the sort order
    pub(crate) verify_order: bool,
}

/// Bookkeeping collected during a scan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScanSummary {
    /// Well-formed records pulled from the reader, including the one that stopped the scan
    pub(crate) visited: u64,
    pub(crate) matched: u64,
    pub(crate) skipped: u64,
    pub(crate) stopped_early: bool,
}

/// Result of scanning a log for one day
#[derive(Debug, Default, Clone)]
pub(crate) struct ScanResult {
    pub(crate) counts: CounterTable,
    pub(crate) summary: ScanSummary,
}

/// Things worth reporting while scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScanEvent {
    UnexpectedHeader {
        found: Vec<String>,
        expected: [String; 2],
    },
    Skipped(RecordError),
    Stopped {
        line: u64,
        date: NaiveDate,
    },
}

/// Receives scan events. The core never logs on its own.
pub(crate) trait ScanObserver {
    fn observe(&mut self, event: ScanEvent);
}

impl<F: FnMut(ScanEvent)> ScanObserver for F {
    fn observe(&mut self, event: ScanEvent) {
        self(event)
    }
}
