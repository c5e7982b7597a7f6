// crates/core/src/config.rs
use std::path::PathBuf;

use letter_tally_ports::decoding::ByteRendering;
use letter_tally_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Historical default inputs, read in this order.
pub const DEFAULT_INPUTS: [&str; 2] = ["data/19.txt", "data/20.txt"];

/// Resolved run configuration for the tally pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input files, decoded and concatenated in this order.
    pub files: Vec<PathBuf>,
    pub rendering: ByteRendering,
}

impl Config {
    pub fn new(files: Vec<PathBuf>, rendering: ByteRendering) -> DomainResult<Self> {
        if files.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "at least one input file is required".to_string(),
            });
        }
        Ok(Self { files, rendering })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: DEFAULT_INPUTS.iter().map(PathBuf::from).collect(),
            rendering: ByteRendering::default(),
        }
    }
}
