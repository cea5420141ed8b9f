//! In-memory market data source for tests and offline runs.

use std::collections::HashMap;

use async_trait::async_trait;

use termcurve_core::Date;

use crate::error::FeedResult;
use crate::source::{ClosePoint, PriceHistorySource};

/// A map-backed [`PriceHistorySource`].
///
/// Holds full daily series per identifier and answers window queries from
/// memory. Unknown identifiers yield an empty series, mirroring a remote
/// source that has nothing for the symbol.
///
/// # Example
///
/// ```rust
/// use termcurve_core::Date;
/// use termcurve_feed::{ClosePoint, InMemoryHistorySource};
///
/// let date = Date::from_ymd(2024, 1, 2).unwrap();
/// let source = InMemoryHistorySource::new()
///     .with_series("^TNX", vec![ClosePoint::new(date, 4.5)]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryHistorySource {
    series: HashMap<String, Vec<ClosePoint>>,
}

impl InMemoryHistorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a full daily series under an identifier, replacing any previous
    /// series for it. Points are kept sorted by date.
    #[must_use]
    pub fn with_series(mut self, series_id: impl Into<String>, points: Vec<ClosePoint>) -> Self {
        self.insert(series_id, points);
        self
    }

    /// Adds a full daily series under an identifier, replacing any previous
    /// series for it. Points are kept sorted by date.
    pub fn insert(&mut self, series_id: impl Into<String>, mut points: Vec<ClosePoint>) {
        points.sort_by_key(|p| p.date);
        self.series.insert(series_id.into(), points);
    }
}

#[async_trait]
impl PriceHistorySource for InMemoryHistorySource {
    async fn close_history(
        &self,
        series_id: &str,
        start: Date,
        end: Date,
    ) -> FeedResult<Vec<ClosePoint>> {
        let points = self
            .series
            .get(series_id)
            .map(|points| {
                points
                    .iter()
                    .filter(|p| p.date >= start && p.date < end)
                    .copied()
                    .collect()
            })
            .unwrap_or_default();

        Ok(points)
    }
}
