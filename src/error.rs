//! Custom error types for the expense log
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Aggregation never fails, so every variant
//! here belongs to a boundary: storage, configuration, input, or export.

use thiserror::Error;

/// Why a single expense record could not be constructed
///
/// Each variant names the offending field so callers can report it
/// distinctly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecordError {
    /// The date field is missing or not a valid `YYYY-MM-DD` date
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    /// The amount field is unparseable or negative
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// The category field is empty
    #[error("Missing category")]
    MissingCategory,
}

/// The main error type for expense log operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A stored row could not be turned into a record
    #[error("Malformed record at row {row}: {source}")]
    Malformed {
        row: usize,
        #[source]
        source: MalformedRecordError,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Wrap a record error with the data row it came from
    pub fn malformed(row: usize, source: MalformedRecordError) -> Self {
        Self::Malformed { row, source }
    }

    /// Check if this is a malformed record error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<MalformedRecordError> for ExpenseError {
    fn from(err: MalformedRecordError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense log operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
