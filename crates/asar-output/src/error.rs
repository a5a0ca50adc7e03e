//! Error types for asar-output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when writing a result file.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input path {0:?} has no file name")]
    NoFileName(PathBuf),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
