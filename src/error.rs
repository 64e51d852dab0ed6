use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Invalid content file {}: {reason}", path.display())]
    Content { path: PathBuf, reason: String },

    #[error("Unsupported shell: {0}. Use bash, zsh, or fish.")]
    UnsupportedShell(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
