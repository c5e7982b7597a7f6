//! # letter_tally_core
//!
//! Facade over the decode → tally → sort pipeline. The CLI builds a
//! [`Config`] and calls [`run`]; everything else is wiring between the
//! workspace crates.

// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;

pub use config::Config;
pub use letter_tally_domain::analytics::{FrequencyTally, SortedFrequency};
pub use letter_tally_ports::decoding::ByteRendering;

use letter_tally_infra::FsLineDecoder;
use letter_tally_ports::decoding::DecodePlan;
use letter_tally_shared_kernel::Result;
use letter_tally_usecase::BuildAggregate;

/// Everything a run produces, in the order it is printed.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Concatenated rendering of every decoded line of every input file.
    pub aggregate: String,
    /// Case-folded frequency counts in ascending code-point order.
    pub frequency: SortedFrequency,
}

/// Runs the whole pipeline sequentially. Any file-access or decode error
/// aborts the run before anything is produced.
pub fn run(config: &Config) -> Result<RunOutcome> {
    let plan = DecodePlan { paths: config.files.clone(), rendering: config.rendering };

    let decoder = FsLineDecoder::new();
    let output = BuildAggregate::new(&decoder).run(&plan)?;
    log::debug!(
        "aggregated {} chars from {} file(s)",
        output.aggregate.chars().count(),
        output.files.len()
    );

    let tally = FrequencyTally::of(&output.aggregate);
    log::debug!("tally holds {} distinct character(s)", tally.len());

    Ok(RunOutcome {
        frequency: SortedFrequency::from(&tally),
        aggregate: output.aggregate,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use letter_tally_ports::decoding::ByteRendering;
    use letter_tally_shared_kernel::OccurrenceCount;
    use tempfile::NamedTempFile;

    use super::*;

    fn temp_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn pipeline_decodes_tallies_and_sorts() {
        // "AaAa!" on a single line
        let file = temp_with("QWFBYSE=\n");
        let config =
            Config::new(vec![file.path().to_path_buf()], ByteRendering::Text).unwrap();
        let outcome = run(&config).expect("run succeeds");

        assert_eq!(outcome.aggregate, "AaAa!");
        assert_eq!(outcome.frequency.get('a'), Some(OccurrenceCount::from(4)));
        assert_eq!(outcome.frequency.get('!'), Some(OccurrenceCount::one()));
        assert_eq!(outcome.frequency.to_string(), "{'!': 1, 'a': 4}");
    }

    #[test]
    fn repr_wrapper_characters_are_counted_too() {
        let file = temp_with("QWFBYSE=\n");
        let config =
            Config::new(vec![file.path().to_path_buf()], ByteRendering::Repr).unwrap();
        let outcome = run(&config).expect("run succeeds");

        assert_eq!(outcome.aggregate, "b'AaAa!'");
        assert_eq!(outcome.frequency.get('b'), Some(OccurrenceCount::one()));
        assert_eq!(outcome.frequency.get('\''), Some(OccurrenceCount::from(2)));
        assert_eq!(outcome.frequency.get('a'), Some(OccurrenceCount::from(4)));
    }

    #[test]
    fn files_are_concatenated_in_config_order() {
        let first = temp_with("YWI=\n");
        let second = temp_with("Y2Q=\n");
        let config = Config::new(
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
            ByteRendering::Repr,
        )
        .unwrap();
        let outcome = run(&config).expect("run succeeds");
        assert_eq!(outcome.aggregate, "b'ab'b'cd'");
    }

    #[test]
    fn zero_line_file_contributes_nothing() {
        let empty = temp_with("");
        let config =
            Config::new(vec![empty.path().to_path_buf()], ByteRendering::Repr).unwrap();
        let outcome = run(&config).expect("run succeeds");
        assert_eq!(outcome.aggregate, "");
        assert!(outcome.frequency.is_empty());
    }

    #[test]
    fn missing_file_aborts_the_run() {
        let config =
            Config::new(vec![PathBuf::from("data/does-not-exist.txt")], ByteRendering::Repr)
                .unwrap();
        assert!(run(&config).is_err());
    }
}
