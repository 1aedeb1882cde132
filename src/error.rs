//! Error types for csv2docx library.

use std::io;
use thiserror::Error;

/// Result type alias for csv2docx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating a report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading inputs or writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The CSV reader could not decode an input.
    #[error("Failed to read {name}: {source}")]
    Csv {
        /// Name of the offending input
        name: String,
        /// Underlying reader error
        #[source]
        source: csv::Error,
    },

    /// An input parsed as CSV but does not form a rectangular table.
    #[error("Malformed table in {name}: {message}")]
    MalformedTable {
        /// Name of the offending input
        name: String,
        /// What was wrong with it
        message: String,
    },

    /// An input has no header row at all.
    #[error("No columns to parse from {name}")]
    EmptyData {
        /// Name of the offending input
        name: String,
    },

    /// A configuration value is outside its declared domain.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error during rendering (DOCX, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Name of the input that caused this error, if any.
    pub fn input_name(&self) -> Option<&str> {
        match self {
            Error::Csv { name, .. }
            | Error::MalformedTable { name, .. }
            | Error::EmptyData { name } => Some(name),
            _ => None,
        }
    }
}
