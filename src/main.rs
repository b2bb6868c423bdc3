//! CLI entry point for the image grid composition tool

use clap::Parser;
use gridstitch::io::cli::{Cli, GridProcessor};
use std::process::ExitCode;

// Allow print for the single-line error contract
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut processor = GridProcessor::new(cli);
    match processor.process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
