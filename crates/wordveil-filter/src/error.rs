//! Error types for WordVeil

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Masker configuration errors
    #[error("Invalid filler {0:?}: must be exactly one character")]
    InvalidFiller(String),

    // Word list errors
    #[error("Word list not found: {}", .0.display())]
    WordListNotFound(PathBuf),

    #[error("Word list error: {0}")]
    WordList(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
