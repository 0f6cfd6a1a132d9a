//! CLI argument definitions
//!
//! Arguments are validated while parsing, so anything that reaches the core
//! is an existing non-empty file and a real calendar date.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::Config;
use crate::consts::DEFAULT_HEADER;
use crate::error::AppError;
use crate::utils::parse_date;

#[derive(Debug, Parser)]
#[command(name = "most-active-cookie")]
#[command(about = "Find the most active cookie for a specific date", version)]
#[command(after_help = "Example: most-active-cookie -f cookie_log.csv -d 2018-12-09")]
pub(crate) struct Cli {
    /// Path to the cookie log CSV file
    #[arg(short, long, value_name = "FILE", value_parser = parse_log_path)]
    pub(crate) filename: PathBuf,

    /// Target date in YYYY-MM-DD format
    #[arg(short, long, value_parser = parse_target_date)]
    pub(crate) date: NaiveDate,

    /// Enable verbose output
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Fail if the log is not sorted newest first
    #[arg(long)]
    pub(crate) verify_order: bool,

    /// Expected header field names (default: cookie,timestamp)
    #[arg(long, value_name = "COOKIE,TIMESTAMP", value_parser = parse_header)]
    pub(crate) header: Option<[String; 2]>,
}

fn parse_log_path(s: &str) -> Result<PathBuf, AppError> {
    let path = PathBuf::from(s);
    let meta = std::fs::metadata(&path).map_err(|_| AppError::FileNotFound {
        path: path.clone(),
    })?;
    if !meta.is_file() {
        return Err(AppError::NotAFile { path });
    }
    if meta.len() == 0 {
        return Err(AppError::EmptyFile { path });
    }
    Ok(path)
}

fn parse_target_date(s: &str) -> Result<NaiveDate, AppError> {
    parse_date(s)
}

fn parse_header(s: &str) -> Result<[String; 2], AppError> {
    let invalid = || AppError::InvalidHeader {
        input: s.to_string(),
    };
    let (cookie, timestamp) = s.split_once(',').ok_or_else(invalid)?;
    let (cookie, timestamp) = (cookie.trim(), timestamp.trim());
    if cookie.is_empty() || timestamp.is_empty() || timestamp.contains(',') {
        return Err(invalid());
    }
    Ok([cookie.to_string(), timestamp.to_string()])
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI left them at false
        if !self.verbose && config.verbose {
            self.verbose = true;
        }
        if !self.verify_order && config.verify_order {
            self.verify_order = true;
        }

        if self.header.is_none() {
            self.header = config.header.clone();
        }

        self
    }

    pub(crate) fn expected_header(&self) -> [String; 2] {
        self.header
            .clone()
            .unwrap_or_else(|| DEFAULT_HEADER.map(str::to_string))
    }
}
