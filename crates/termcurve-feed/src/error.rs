//! Error types for market data access.

use termcurve_core::Date;
use thiserror::Error;

/// A specialized Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors raised by market data sources and the fetch policy.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The source returned no quotes at all for the requested window.
    #[error("no data found for {series_id} in window {start}..{end}")]
    NoData {
        /// The series identifier that was requested.
        series_id: String,
        /// Window start (inclusive).
        start: Date,
        /// Window end (exclusive).
        end: Date,
    },

    /// The transport layer failed (connection, status, timeout).
    #[error("transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },

    /// The source responded but the payload could not be decoded.
    #[error("decode error: {message}")]
    Decode {
        /// Description of the failure.
        message: String,
    },
}

impl FeedError {
    /// Creates a no-data error for a series and window.
    #[must_use]
    pub fn no_data(series_id: impl Into<String>, start: Date, end: Date) -> Self {
        Self::NoData {
            series_id: series_id.into(),
            start,
            end,
        }
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::transport(e.to_string())
    }
}
