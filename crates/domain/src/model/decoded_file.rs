// crates/domain/src/model/decoded_file.rs
use std::path::PathBuf;

/// One input file after line-by-line base64 decoding and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    pub path: PathBuf,
    pub text: String,
}

impl DecodedFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self { path: path.into(), text: text.into() }
    }
}
