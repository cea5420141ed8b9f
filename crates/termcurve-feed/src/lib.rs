//! # Termcurve Feed
//!
//! Market data access for the termcurve snapshot tool.
//!
//! The seam between the pipeline and the outside world is the
//! [`PriceHistorySource`] trait: a date-windowed request for a close-price
//! series. Two implementations are provided:
//!
//! - [`YahooChartSource`]: the Yahoo Finance v8 chart endpoint over HTTP
//! - [`InMemoryHistorySource`]: a map-backed source for tests and offline
//!   runs
//!
//! On top of the source sits the fetch policy, [`fetch_yield`]: a short
//! lookback window around the target date with a latest-available fallback
//! when the exact date has no print.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod fetch;
pub mod memory;
pub mod source;
pub mod yahoo;

pub use error::{FeedError, FeedResult};
pub use fetch::{fetch_yield, LOOKAHEAD_DAYS, LOOKBACK_DAYS};
pub use memory::InMemoryHistorySource;
pub use source::{ClosePoint, PriceHistorySource};
pub use yahoo::YahooChartSource;
