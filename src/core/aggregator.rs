//! Single-day aggregation over a descending-sorted cookie log
//!
//! Counts each cookie seen on the target date and stops at the first record
//! dated before it. Records newer than the target are read and ignored.

use std::io::Read;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::core::reader::{RecordReader, Row};
use crate::core::types::{ScanEvent, ScanObserver, ScanOptions, ScanResult};
use crate::error::{LogError, RecordError};
use crate::utils::{local_date, parse_timestamp};

/// Count occurrences of every cookie logged on `target`.
///
/// The reader must yield records newest first. Only records on or after the
/// target date are read, plus the one record that ends the scan.
pub(crate) fn count_for_date<R: Read>(
    reader: RecordReader<R>,
    target: NaiveDate,
    options: ScanOptions,
    observer: &mut dyn ScanObserver,
) -> Result<ScanResult, LogError> {
    let mut result = ScanResult::default();
    let mut previous: Option<DateTime<FixedOffset>> = None;

    for row in reader {
        let record = match row? {
            Row::Record(record) => record,
            Row::Skipped(reason) => {
                result.summary.skipped += 1;
                observer.observe(ScanEvent::Skipped(reason));
                continue;
            }
        };

        let Some(ts) = parse_timestamp(&record.timestamp) else {
            result.summary.skipped += 1;
            observer.observe(ScanEvent::Skipped(RecordError::InvalidTimestamp {
                line: record.line,
                value: record.timestamp,
            }));
            continue;
        };

        result.summary.visited += 1;

        if options.verify_order {
            if let Some(prev) = previous
                && ts > prev
            {
                return Err(LogError::OutOfOrder {
                    line: record.line,
                    previous: prev,
                    found: ts,
                });
            }
            previous = Some(ts);
        }

        let date = local_date(&ts);
        if date == target {
            result.counts.record(&record.cookie);
            result.summary.matched += 1;
        } else if date < target {
            result.summary.stopped_early = true;
            observer.observe(ScanEvent::Stopped {
                line: record.line,
                date,
            });
            break;
        }
    }

    Ok(result)
}
