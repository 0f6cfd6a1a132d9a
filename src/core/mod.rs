//! Core module - finding the most active cookie for one day

mod aggregator;
mod reader;
mod selector;
mod types;

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::LogError;

use aggregator::count_for_date;
use reader::RecordReader;
use selector::select_winners;

pub(crate) use types::{ScanEvent, ScanObserver, ScanOptions, ScanSummary};

/// Winners for a day plus what it took to find them
#[derive(Debug, Clone)]
pub(crate) struct MostActive {
    pub(crate) cookies: Vec<String>,
    pub(crate) summary: ScanSummary,
}

/// Open a cookie log and find the most active cookie(s) on `target`.
///
/// Header names that differ from `expected_header` are reported through the
/// observer but don't stop the scan. The file is closed on every return path.
pub(crate) fn most_active(
    path: &Path,
    target: NaiveDate,
    expected_header: &[String; 2],
    options: ScanOptions,
    observer: &mut dyn ScanObserver,
) -> Result<MostActive, LogError> {
    let file = File::open(path).map_err(|source| LogError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = RecordReader::new(file)?;
    if reader.header() != expected_header.as_slice() {
        observer.observe(ScanEvent::UnexpectedHeader {
            found: reader.header().to_vec(),
            expected: expected_header.clone(),
        });
    }

    let result = count_for_date(reader, target, options, observer)?;
    Ok(MostActive {
        cookies: select_winners(&result.counts),
        summary: result.summary,
    })
}
