//! Custom error types for the kata workbench
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for kata operations
#[derive(Error, Debug)]
pub enum KataError {
    /// Requested report formatter does not exist
    #[error("Invalid formatter: {0}")]
    InvalidFormatter(String),

    /// Category text outside the known expense categories
    #[error("Unknown expense category: {0}")]
    UnknownCategory(String),

    /// String calculator operand that is not an integer
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// Unrecognized rock-paper-scissors move
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    /// Age requested for a date before the birth date
    #[error("Target date {target} is before birth date {birth}")]
    DateOrder { birth: NaiveDate, target: NaiveDate },

    /// Malformed expense import data
    #[error("Import error: {0}")]
    Import(String),

    /// Report output errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reader errors
    #[error("CSV error: {0}")]
    Csv(String),
}

impl KataError {
    /// Check if this is an invalid formatter error
    pub fn is_invalid_formatter(&self) -> bool {
        matches!(self, Self::InvalidFormatter(_))
    }
}

impl From<std::io::Error> for KataError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for KataError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for kata operations
pub type KataResult<T> = Result<T, KataError>;
