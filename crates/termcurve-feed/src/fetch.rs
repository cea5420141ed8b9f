//! The yield fetch policy.

use termcurve_core::Date;
use termcurve_math::round_dp;

use crate::error::{FeedError, FeedResult};
use crate::source::PriceHistorySource;

/// Days of history requested before the target date.
pub const LOOKBACK_DAYS: i64 = 7;

/// Days of history requested after the target date, so a window request
/// that treats its end as exclusive still covers the target itself.
pub const LOOKAHEAD_DAYS: i64 = 1;

/// Fetches the yield for a series on a target date.
///
/// Requests the close-price series for the half-open window
/// `[target - 7d, target + 1d)`. If the window contains a print exactly at
/// `target`, that close is returned; otherwise the most recent print in the
/// window is used as a fallback. Either way the value is rounded to two
/// decimal places.
///
/// # Errors
///
/// Returns [`FeedError::NoData`] when the source has nothing at all for the
/// window, and propagates transport/decode failures from the source.
pub async fn fetch_yield<S>(source: &S, series_id: &str, target: Date) -> FeedResult<f64>
where
    S: PriceHistorySource + ?Sized,
{
    let start = target - LOOKBACK_DAYS;
    let end = target + LOOKAHEAD_DAYS;

    let history = source.close_history(series_id, start, end).await?;

    let Some(latest) = history.last() else {
        return Err(FeedError::no_data(series_id, start, end));
    };

    let close = history
        .iter()
        .find(|p| p.date == target)
        .map_or(latest.close, |p| p.close);

    Ok(round_dp(close, 2))
}
