// crates/usecase/src/dto.rs
use letter_tally_domain::model::DecodedFile;

/// Result of a decode pass over every planned input file.
#[derive(Debug, Clone)]
pub struct AggregateOutput {
    /// Per-file decodings, in plan order.
    pub files: Vec<DecodedFile>,
    /// Concatenation of every file's text, in plan order.
    pub aggregate: String,
}
