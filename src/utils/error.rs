use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required field(s): {field} at row(s) {rows:?}")]
    MissingField { field: String, rows: Vec<usize> },

    #[error("Invalid data type for {field} at row {row}: expected a number")]
    InvalidType { field: String, row: usize },

    #[error("Invalid value for {field} at row {row}: {constraint}")]
    InvalidRange {
        field: String,
        row: usize,
        constraint: String,
    },

    #[error("Invalid format type: {format}. Must be either 'csv' or 'json'")]
    UnsupportedFormat { format: String },

    #[error("Unknown month name '{month}' at row {row}")]
    UnknownMonth { month: String, row: usize },

    #[error("Cannot compute growth for {month}: previous adjusted revenue is zero")]
    DivisionByZero { month: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration error: missing required setting {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
