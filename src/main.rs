//! Most active cookie finder
//!
//! Exit codes:
//!   0 - Success, including a day without any activity
//!   1 - The log could not be read
//!   2 - Usage error (bad arguments, missing file, malformed date)

mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::init_logging;

fn main() -> ExitCode {
    // clap exits with status 2 on usage errors
    let cli = Cli::parse();

    let loaded = Config::load();
    let cli = cli.with_config(&loaded.config);

    init_logging(cli.verbose);
    loaded.report();

    let found = match app::find_most_active(&cli) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = app::print_cookies(std::io::stdout().lock(), &found.cookies) {
        eprintln!("Error: failed to write output: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
