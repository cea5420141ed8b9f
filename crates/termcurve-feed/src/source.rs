//! The market data source seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use termcurve_core::Date;

use crate::error::FeedResult;

/// A single close-price observation in a daily series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosePoint {
    /// Calendar date of the observation.
    pub date: Date,
    /// Closing value. For rate series this is the quoted yield in percent.
    pub close: f64,
}

impl ClosePoint {
    /// Creates a new close-price observation.
    #[must_use]
    pub fn new(date: Date, close: f64) -> Self {
        Self { date, close }
    }
}

/// A provider of daily close-price history.
///
/// Implementations return the observations for `series_id` whose dates fall
/// in the half-open window `[start, end)`, sorted ascending by date. An
/// empty vector is a valid response; the fetch policy decides what to make
/// of it.
#[async_trait]
pub trait PriceHistorySource: Send + Sync {
    /// Returns the close-price series for the window, oldest first.
    async fn close_history(
        &self,
        series_id: &str,
        start: Date,
        end: Date,
    ) -> FeedResult<Vec<ClosePoint>>;
}
