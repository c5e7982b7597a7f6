// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use letter_tally::args::Args;
use letter_tally::error::Result;
use letter_tally::{logger, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logger::setup_logger();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.to_config()?;
    let outcome = letter_tally_core::run(&config)?;
    presentation::print_results(&outcome, args.format)
}
