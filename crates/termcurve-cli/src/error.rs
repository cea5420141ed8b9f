//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration is structurally valid but unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A target date that does not parse.
    #[error("Invalid date: {0}. Use MM/DD/YYYY.")]
    InvalidDate(String),

    /// A series whose name yields no maturity.
    #[error("Invalid series '{name}': {reason}")]
    InvalidSeries {
        /// The configured series name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
