#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BokslNavError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Failed to open {path}: {reason}")]
    ExternalOpenFailed { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, BokslNavError>;
