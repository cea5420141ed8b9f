//! # Termcurve Curves
//!
//! The tabular heart of the snapshot pipeline:
//!
//! - [`RawYieldTable`]: fetched yields, one row per configured series, one
//!   column per target date, with absent cells where a fetch failed
//! - [`YieldGrid`]: the interpolated maturity × date grid, where every
//!   integer maturity up to the longest quoted one carries either a direct
//!   quote or a linearly interpolated value
//!
//! Direct quotes always take precedence over interpolation: for each date
//! the known maturities are partitioned out first (averaging duplicate
//! quotes for the same maturity), and only the remainder of the maturity
//! grid is interpolated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod grid;
pub mod table;

pub use error::{CurveError, CurveResult};
pub use grid::YieldGrid;
pub use table::{RawYieldTable, SeriesRow, SERIES_LABEL_HEADER};
