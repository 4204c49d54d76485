//! Error types for rref_solver

use thiserror::Error;

/// Errors raised while building or combining matrices
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column
    #[error("Matrix must have at least one row and one column")]
    Empty,

    /// Rows of different lengths
    #[error("Row {row} has {found} entries, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Operand shapes are not compatible
    #[error("Dimensions not compatible: ({lhs_rows}, {lhs_cols}) and ({rhs_rows}, {rhs_cols})")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
}

/// Raised by the text adapter when the input is not a rectangular matrix of numbers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputFormatError {
    #[error("Invalid input format: no rows entered")]
    Empty,

    #[error("Invalid input format: '{token}' on line {line} is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error("Invalid input format: line {line} has {found} numbers, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Zero diagonal pivot met by the inverse engine. `step` is the zero-based
/// diagonal index where elimination stopped.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Matrix is singular")]
pub struct SingularMatrixError {
    pub step: usize,
}

pub type Result<T> = std::result::Result<T, MatrixError>;
