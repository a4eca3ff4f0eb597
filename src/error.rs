use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while collecting filters, loading trips, or rendering reports.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city, month or day entered at a prompt is not one of the allowed values.
    #[error("{value} is not a valid {kind}")]
    InvalidSelection { kind: &'static str, value: String },

    /// The city's source file could not be opened.
    #[error("Failed to load trip data from {path}: {source}")]
    DataLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file (bad quoting, ragged rows, ...).
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A column the loader depends on is absent from the header row.
    #[error("Required column '{column}' missing from {path}")]
    MissingColumn { column: &'static str, path: PathBuf },

    /// A record whose timestamp or birth year could not be parsed.
    #[error("Malformed row at line {line}: invalid {field} '{value}'")]
    MalformedRow {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// Standard input hit end-of-file while a prompt was waiting.
    #[error("Input closed while waiting for {0}")]
    InputClosed(&'static str),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BikeshareError>;
