//! Maturity type: the interpolation axis of the yield curve.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TermCurveError, TermCurveResult};

/// A bond maturity in whole years.
///
/// Series are configured under display names like `"10-year"`; the maturity
/// is the leading integer of that label. Each label derives exactly one
/// maturity, and the same label is produced when formatting back.
///
/// # Example
///
/// ```rust
/// use termcurve_core::types::Maturity;
///
/// let m = Maturity::parse_label("10-year").unwrap();
/// assert_eq!(m.years(), 10);
/// assert_eq!(m.label(), "10-year");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Maturity(u32);

impl Maturity {
    /// Creates a maturity from a number of whole years.
    #[must_use]
    pub fn from_years(years: u32) -> Self {
        Maturity(years)
    }

    /// Derives the maturity from a series display name.
    ///
    /// The label's leading segment (up to the first `-`) must parse as an
    /// unsigned integer: `"10-year"` gives 10, `"1-year"` gives 1.
    ///
    /// # Errors
    ///
    /// Returns `TermCurveError::InvalidMaturity` if there is no leading
    /// integer.
    pub fn parse_label(label: &str) -> TermCurveResult<Self> {
        let head = label.split('-').next().unwrap_or("");
        head.trim()
            .parse::<u32>()
            .map(Maturity)
            .map_err(|_| TermCurveError::invalid_maturity(label, "expected a leading integer"))
    }

    /// Returns the maturity in years.
    #[must_use]
    pub fn years(&self) -> u32 {
        self.0
    }

    /// Returns the maturity as a float, for use as an interpolation abscissa.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Returns the canonical "<N>-year" row label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-year", self.0)
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-year", self.0)
    }
}
