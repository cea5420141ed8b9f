//! Yahoo Finance chart endpoint source.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use termcurve_core::Date;

use crate::error::{FeedError, FeedResult};
use crate::source::{ClosePoint, PriceHistorySource};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

// The chart endpoint rejects requests without a browser-ish user agent.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) termcurve";

/// A [`PriceHistorySource`] backed by the Yahoo Finance v8 chart endpoint.
///
/// Requests daily bars for a symbol over a Unix-timestamp window and decodes
/// the `timestamp` × `indicators.quote[0].close` arrays into a close-price
/// series. Days where the feed reports a null close are skipped.
pub struct YahooChartSource {
    client: reqwest::Client,
    base_url: String,
}

impl YahooChartSource {
    /// Creates a source against the public Yahoo Finance endpoint.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be constructed.
    pub fn new() -> FeedResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FeedError::transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the endpoint base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Decodes a chart response body into a window-filtered close series.
    fn decode_history(body: &[u8], start: Date, end: Date) -> FeedResult<Vec<ClosePoint>> {
        let response: ChartResponse =
            serde_json::from_slice(body).map_err(|e| FeedError::decode(e.to_string()))?;

        if let Some(err) = response.chart.error {
            return Err(FeedError::transport(format!(
                "{}: {}",
                err.code, err.description
            )));
        }

        let Some(result) = response
            .chart
            .result
            .and_then(|mut results| (!results.is_empty()).then(|| results.remove(0)))
        else {
            return Ok(Vec::new());
        };

        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        let mut points = Vec::new();
        for (ts, close) in result.timestamp.iter().zip(closes) {
            let Some(close) = close else { continue };
            let date = Date::from_unix_timestamp(*ts)
                .map_err(|e| FeedError::decode(e.to_string()))?;
            if date >= start && date < end {
                points.push(ClosePoint::new(date, close));
            }
        }
        points.sort_by_key(|p| p.date);

        Ok(points)
    }
}

#[async_trait]
impl PriceHistorySource for YahooChartSource {
    async fn close_history(
        &self,
        series_id: &str,
        start: Date,
        end: Date,
    ) -> FeedResult<Vec<ClosePoint>> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, series_id);
        debug!(series_id, %start, %end, "requesting chart history");

        let body = self
            .client
            .get(&url)
            .query(&[
                ("period1", start.unix_timestamp().to_string()),
                ("period2", end.unix_timestamp().to_string()),
                ("interval", "1d".to_string()),
                ("includePrePost", "false".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Self::decode_history(&body, start, end)
    }
}

// Wire format of the v8 chart endpoint, reduced to the fields read here.

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartApiError>,
}

#[derive(Debug, Deserialize)]
struct ChartApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}
