// jsqueeze/src/main.rs
//! jsqueeze entry point.
//!
//! Parses the command line, sets up logging, runs the command and turns any
//! failure into a coloured message and a non-zero exit status.

use clap::Parser;
use jsqueeze::cli::Cli;
use jsqueeze::commands::{dispatch, exit_code_for};
use jsqueeze::logger;
use jsqueeze::ui::output_format::error_msg;

fn main() {
    let cli = Cli::parse();
    logger::init_logger(logger::level_for(&cli));

    if let Err(err) = dispatch(&cli) {
        error_msg(format!("{:#}", err));
        std::process::exit(exit_code_for(&err));
    }
}
