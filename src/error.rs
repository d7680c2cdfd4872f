//! Error types for the Gaussian elimination solver.
//!
//! All failure conditions are detected at the point of occurrence (input
//! validation, pivot scan, diagonal division) and surfaced synchronously as a
//! typed error. Nothing is retried: a singular system stays singular.

use thiserror::Error;

/// Errors that can occur while solving a dense linear system.
#[derive(Debug, Error)]
pub enum GaussError {
    /// The coefficient matrix is not square.
    #[error("matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Number of matrix rows
        rows: usize,
        /// Number of matrix columns
        cols: usize,
    },

    /// The right-hand-side vector length does not match the matrix dimension.
    #[error("rhs dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Matrix dimension n
        expected: usize,
        /// Length of the rhs vector provided
        got: usize,
    },

    /// A NaN or infinite value is present in the coefficient matrix.
    #[error("non-finite matrix entry at ({row}, {col})")]
    NonFiniteMatrixEntry {
        /// Row index of the offending entry
        row: usize,
        /// Column index of the offending entry
        col: usize,
    },

    /// A NaN or infinite value is present in the right-hand side.
    #[error("non-finite rhs entry at index {index}")]
    NonFiniteRhsEntry {
        /// Index of the offending entry
        index: usize,
    },

    /// No usable pivot was found: the matrix is singular or nearly singular.
    #[error("matrix is singular or nearly singular (pivot below threshold at step {step})")]
    SingularMatrix {
        /// Elimination step (or diagonal index during back-substitution)
        /// at which the pivot magnitude fell below the threshold
        step: usize,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, GaussError>;

impl GaussError {
    /// Returns `true` if this error was raised by input validation, before
    /// any elimination work started.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GaussError::NotSquare { .. }
                | GaussError::DimensionMismatch { .. }
                | GaussError::NonFiniteMatrixEntry { .. }
                | GaussError::NonFiniteRhsEntry { .. }
        )
    }

    /// Returns `true` if this is a singular/near-singular matrix error.
    pub fn is_singular(&self) -> bool {
        matches!(self, GaussError::SingularMatrix { .. })
    }
}
