use std::io::Write;

use tracing::{debug, warn};

use crate::cli::Cli;
use crate::core::{MostActive, ScanEvent, ScanOptions, most_active};
use crate::error::LogError;

/// Forward scan events to the global subscriber
fn log_observer() -> impl FnMut(ScanEvent) {
    |event| match event {
        ScanEvent::UnexpectedHeader { found, expected } => {
            warn!("Unexpected header: {found:?}, expected: {expected:?}");
        }
        ScanEvent::Skipped(reason) => warn!(line = reason.line(), "{reason}"),
        ScanEvent::Stopped { line, date } => {
            debug!("Reached date {date} at line {line}, stopping");
        }
    }
}

/// Scan the log named on the command line
pub(crate) fn find_most_active(cli: &Cli) -> Result<MostActive, LogError> {
    debug!(
        "Counting cookies in {} for date {}",
        cli.filename.display(),
        cli.date
    );

    let options = ScanOptions {
        verify_order: cli.verify_order,
    };
    let mut observer = log_observer();
    let found = most_active(
        &cli.filename,
        cli.date,
        &cli.expected_header(),
        options,
        &mut observer,
    )?;

    let summary = found.summary;
    debug!(
        "Visited {} records, {} on target date, {} skipped{}",
        summary.visited,
        summary.matched,
        summary.skipped,
        if summary.stopped_early {
            " (stopped early)"
        } else {
            ""
        }
    );
    debug!("Most active cookies: {:?}", found.cookies);

    Ok(found)
}

/// One cookie per line, nothing else
pub(crate) fn print_cookies<W: Write>(mut out: W, cookies: &[String]) -> std::io::Result<()> {
    for cookie in cookies {
        writeln!(out, "{cookie}")?;
    }
    out.flush()
}
