// src/args.rs
use std::path::PathBuf;

use clap::Parser;
use letter_tally_core::Config;
use letter_tally_core::config::DEFAULT_INPUTS;
use letter_tally_shared_kernel::DomainResult;

use crate::options::{OutputFormat, Rendering};

/// Decode base64-encoded lines and tally character frequencies.
#[derive(Debug, Parser)]
#[command(name = "letter_tally", version, about)]
pub struct Args {
    /// Input files; every line is one base64 blob.
    #[arg(value_name = "FILE", default_values = DEFAULT_INPUTS)]
    pub files: Vec<PathBuf>,

    /// How decoded bytes enter the counted text.
    #[arg(long, value_enum, default_value_t = Rendering::default())]
    pub rendering: Rendering,

    /// Output encoding for the two result lines.
    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,
}

impl Args {
    pub fn to_config(&self) -> DomainResult<Config> {
        Config::new(self.files.clone(), self.rendering.into())
    }
}
