use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Usage errors raised while validating command-line input.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date format: {input}. Expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("File is empty: {}", path.display())]
    EmptyFile { path: PathBuf },

    #[error("Invalid header \"{input}\" (expected two comma-separated field names)")]
    InvalidHeader { input: String },
}

/// Fatal errors: the scan stops and the run fails.
#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("Cannot open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty file: no header line found")]
    EmptyInput,

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Log is not sorted by timestamp descending at line {line}: {found} follows {previous}")]
    OutOfOrder {
        line: u64,
        previous: DateTime<FixedOffset>,
        found: DateTime<FixedOffset>,
    },
}

/// Per-record problems. The record is skipped and the scan continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum RecordError {
    #[error("Skipping malformed line {line}: expected 2 fields, found {found}")]
    FieldCount { line: u64, found: usize },

    #[error("Skipping empty values on line {line}")]
    EmptyField { line: u64 },

    #[error("Skipping line {line} with invalid timestamp: {value}")]
    InvalidTimestamp { line: u64, value: String },

    #[error("Skipping line {line}: not valid UTF-8")]
    Undecodable { line: u64 },
}

impl RecordError {
    pub(crate) fn line(&self) -> u64 {
        match self {
            RecordError::FieldCount { line, .. }
            | RecordError::EmptyField { line }
            | RecordError::InvalidTimestamp { line, .. }
            | RecordError::Undecodable { line } => *line,
        }
    }
}
