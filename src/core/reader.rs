//! Cookie log reader
//!
//! Pulls `cookie,timestamp` pairs out of a comma-delimited stream, one line at
//! a time. Lines that don't hold exactly two non-empty fields come back as
//! [`Row::Skipped`] so the caller can report them and keep going.

use std::io::Read;

use csv::{ByteRecord, ReaderBuilder};

use crate::core::types::RawRecord;
use crate::error::{LogError, RecordError};

/// A single data line, either usable or skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Row {
    Record(RawRecord),
    Skipped(RecordError),
}

pub(crate) struct RecordReader<R> {
    inner: csv::Reader<R>,
    record: ByteRecord,
    header: Vec<String>,
    done: bool,
}

impl<R: Read> RecordReader<R> {
    /// Wrap a stream and consume its header line.
    ///
    /// A stream without any line at all is [`LogError::EmptyInput`].
    pub(crate) fn new(rdr: R) -> Result<Self, LogError> {
        // blank lines are dropped by the csv reader, not reported as malformed
        let mut inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr);

        let mut record = ByteRecord::new();
        let found = inner
            .read_byte_record(&mut record)
            .map_err(|source| LogError::Read { line: 1, source })?;
        if !found {
            return Err(LogError::EmptyInput);
        }

        let header = record
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let text = String::from_utf8_lossy(field);
                let text = if i == 0 {
                    text.trim_start_matches('\u{feff}')
                } else {
                    &*text
                };
                text.trim().to_string()
            })
            .collect();

        Ok(Self {
            inner,
            record,
            header,
            done: false,
        })
    }

    pub(crate) fn header(&self) -> &[String] {
        &self.header
    }

    fn line(&self) -> u64 {
        self.record.position().map_or(0, |p| p.line())
    }

    fn classify(&self) -> Row {
        let line = self.line();
        if self.record.len() != 2 {
            return Row::Skipped(RecordError::FieldCount {
                line,
                found: self.record.len(),
            });
        }

        let (Ok(cookie), Ok(timestamp)) = (
            std::str::from_utf8(&self.record[0]),
            std::str::from_utf8(&self.record[1]),
        ) else {
            return Row::Skipped(RecordError::Undecodable { line });
        };

        let (cookie, timestamp) = (cookie.trim(), timestamp.trim());
        if cookie.is_empty() || timestamp.is_empty() {
            return Row::Skipped(RecordError::EmptyField { line });
        }

        Row::Record(RawRecord {
            line,
            cookie: cookie.to_string(),
            timestamp: timestamp.to_string(),
        })
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Row, LogError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.read_byte_record(&mut self.record) {
            Ok(true) => Some(Ok(self.classify())),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(source) => {
                self.done = true;
                Some(Err(LogError::Read {
                    line: self.inner.position().line(),
                    source,
                }))
            }
        }
    }
}
