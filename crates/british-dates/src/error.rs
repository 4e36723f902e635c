//! Error types for british-dates operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Ambiguous or nonexistent local time: {0}")]
    AmbiguousTime(String),
}

pub type Result<T> = std::result::Result<T, DateError>;
