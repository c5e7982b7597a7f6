// src/error.rs
use letter_tally_shared_kernel::{DomainError, LetterTallyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Pipeline(#[from] LetterTallyError),

    #[error("Invalid arguments: {0}")]
    Arguments(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
