// crates/ports/src/decoding.rs
use std::path::PathBuf;

use letter_tally_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// How decoded byte sequences are turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteRendering {
    /// The literal `b'...'` form of the raw byte sequence. This reproduces
    /// the historical output, where the wrapper characters themselves end
    /// up in the counted text.
    #[default]
    Repr,
    /// Lossy UTF-8 decoding of the raw bytes.
    Text,
}

/// Input parameters controlling the decode pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodePlan {
    /// Files to decode, in the order their output is concatenated.
    pub paths: Vec<PathBuf>,
    pub rendering: ByteRendering,
}

/// DTO representing one decoded input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedFileDto {
    pub path: PathBuf,
    pub text: String,
    pub lines: usize,
}

/// Port for decoding line-encoded input files.
pub trait LineDecoder: Send + Sync {
    fn decode(&self, plan: &DecodePlan) -> Result<Vec<DecodedFileDto>>;
}
