//! Error types for daynotes.

use thiserror::Error;

/// Errors that can occur in daynotes operations.
#[derive(Error, Debug)]
pub enum DayNotesError {
    #[error("Malformed day identifier '{id}': {reason}")]
    Format { id: String, reason: String },

    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    #[error("Date out of supported range: year {year}, month {month}, day {day}")]
    DateOutOfRange { year: i32, month: i32, day: i32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read note file: {0}")]
    Deserialization(String),

    #[error("Could not write note file: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DayNotesError {
    pub(crate) fn format(id: &str, reason: impl Into<String>) -> Self {
        DayNotesError::Format {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for daynotes operations.
pub type DayNotesResult<T> = Result<T, DayNotesError>;
