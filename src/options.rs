// src/options.rs
use clap::ValueEnum;
use letter_tally_core::ByteRendering;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The aggregate text on one line, the sorted mapping on the next.
    #[default]
    Plain,
    Json,
}

/// CLI-facing mirror of [`ByteRendering`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum Rendering {
    /// Count the literal `b'...'` form of each decoded line.
    #[default]
    Repr,
    /// Count the decoded bytes as UTF-8 text.
    Text,
}

impl From<Rendering> for ByteRendering {
    fn from(value: Rendering) -> Self {
        match value {
            Rendering::Repr => Self::Repr,
            Rendering::Text => Self::Text,
        }
    }
}
