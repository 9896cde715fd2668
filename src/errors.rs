// src/errors.rs

//! Crate-wide error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseOrderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error on line {line}: {msg}")]
    ParseError { line: usize, msg: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requirements contain a cycle, so no order exists.
    #[error("Cycle detected in course requirements")]
    CycleDetected,
}

pub type Result<T> = std::result::Result<T, CourseOrderError>;
