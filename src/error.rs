// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while moving a frequency table to or from disk.
///
/// Every variant names the offending path. None of them leave a partial
/// result behind: the operation that returned the error produced nothing.
#[derive(Error, Debug)]
pub enum GrocerError {
    #[error("Error: Could not open file {} for reading.", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading data from {}.", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: Could not open file {} for writing.", .path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sink may hold a partial write and must not be trusted.
    #[error("Error writing data to {}.", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {} at line {line_number}: {line:?}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("Snapshot {} could not be encoded or decoded: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error("Invalid configuration in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GrocerError>;
