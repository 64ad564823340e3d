//! Error types shared by all AHP modules.

use thiserror::Error;

/// Errors produced while building matrices or evaluating a hierarchy.
///
/// An undefined consistency ratio is not an error: it is reported as
/// `None` on [`PriorityResult`](crate::priority::PriorityResult).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AhpError {
    /// The matrix is not square, is empty, or holds a non-positive or
    /// non-finite entry.
    #[error("invalid comparison matrix: {0}")]
    InvalidMatrix(String),

    /// A column of the comparison matrix sums to exactly zero.
    #[error("column {column} sums to zero")]
    DivisionByZero { column: usize },

    /// `a[col][row]` is not the reciprocal of `a[row][col]`.
    ///
    /// Only raised when reciprocity checking is enabled.
    #[error("entry ({row}, {col}) is {actual}, expected reciprocal {expected}")]
    NotReciprocal {
        row: usize,
        col: usize,
        expected: f64,
        actual: f64,
    },

    /// Matrix counts or sizes do not line up with the hierarchy.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AhpError>;
