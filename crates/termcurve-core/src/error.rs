//! Error types for the termcurve core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type TermCurveResult<T> = Result<T, TermCurveError>;

/// The core error type for termcurve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermCurveError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A series label from which no maturity could be derived.
    #[error("Invalid maturity label '{label}': {reason}")]
    InvalidMaturity {
        /// The offending label.
        label: String,
        /// Why it could not be parsed.
        reason: String,
    },
}

impl TermCurveError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid maturity label error.
    #[must_use]
    pub fn invalid_maturity(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMaturity {
            label: label.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TermCurveError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));

        let err = TermCurveError::invalid_maturity("ten-year", "no leading integer");
        assert!(err.to_string().contains("ten-year"));
    }
}
