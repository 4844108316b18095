//! Error types for the census pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CensusError {
    #[error("cannot open '{}': file not found", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("error while reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("cannot write '{}': {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot build workbook: {0}")]
    Workbook(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid age brackets: {0}")]
    InvalidBrackets(String),
}

impl CensusError {
    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CensusError>;
