//! Error types for table and curve construction.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while building yield tables and grids.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// A row's value count does not match the table's date count.
    #[error("Row '{series}' has {actual} values, expected {expected}")]
    RowLengthMismatch {
        /// The series whose row is malformed.
        series: String,
        /// Expected number of values (one per date).
        expected: usize,
        /// Actual number of values supplied.
        actual: usize,
    },

    /// A grid was requested from a table with no series rows.
    #[error("Cannot build a yield grid from a table with no series")]
    EmptyTable,

    /// Interpolation failed for a date column.
    #[error("Interpolation failed for date column {column}: {reason}")]
    InterpolationFailed {
        /// Index of the date column.
        column: usize,
        /// Description of the failure.
        reason: String,
    },
}

impl CurveError {
    /// Creates a row length mismatch error.
    #[must_use]
    pub fn row_length_mismatch(series: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::RowLengthMismatch {
            series: series.into(),
            expected,
            actual,
        }
    }

    /// Creates an interpolation failure error.
    #[must_use]
    pub fn interpolation_failed(column: usize, reason: impl Into<String>) -> Self {
        Self::InterpolationFailed {
            column,
            reason: reason.into(),
        }
    }
}
