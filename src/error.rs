//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a price export or writing the gap dates.
#[derive(Debug, Error)]
pub enum MarketDatesError {
    /// The input file does not exist.
    #[error("File {} not found. Please make sure the file exists and try again.", .0.display())]
    InputNotFound(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV framing or encoding failed.
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row has no column with the expected name.
    #[error("Missing column {column:?} in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// A date cell is not in `YYYY-MM-DD` form.
    #[error("Invalid date {value:?} on line {line}: {source}")]
    InvalidDate {
        value: String,
        line: u64,
        #[source]
        source: chrono::ParseError,
    },

    /// The output date template cannot be rendered for a date.
    #[error("Invalid output date format {template:?}: {reason}")]
    InvalidFormat { template: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MarketDatesError>;
