// src/presentation.rs
use letter_tally_core::RunOutcome;
use serde_json::json;

use crate::error::Result;
use crate::options::OutputFormat;

/// Prints the aggregate text followed by the sorted frequency mapping.
pub fn print_results(outcome: &RunOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            println!("{}", outcome.aggregate);
            println!("{}", outcome.frequency);
        }
        OutputFormat::Json => {
            let document = json!({
                "aggregate": &outcome.aggregate,
                "frequency": &outcome.frequency,
            });
            println!("{}", serde_json::to_string(&document)?);
        }
    }
    Ok(())
}
