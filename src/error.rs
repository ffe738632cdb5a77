//! Error types for grid construction and site access.

use std::fmt;

pub type Result<T> = std::result::Result<T, PercolationError>;

/// Caller-contract violations. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// A size or count that has to be positive was not.
    InvalidArgument { name: &'static str, value: usize },

    /// A coordinate or element id fell outside `[0, n)`.
    /// `col` is unused (0) for element ids of the disjoint set.
    IndexOutOfRange { row: i64, col: i64, n: usize },
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidArgument { name, value } => {
                write!(f, "{} must be greater than 0, got {}", name, value)
            }
            PercolationError::IndexOutOfRange { row, col, n } => {
                write!(
                    f,
                    "index out of range: row = {}, col = {} (valid range is [0, {}))",
                    row, col, n
                )
            }
        }
    }
}

impl std::error::Error for PercolationError {}

pub(crate) fn positive(name: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(PercolationError::InvalidArgument { name, value });
    }
    Ok(value)
}
