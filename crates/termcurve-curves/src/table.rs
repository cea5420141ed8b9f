//! The raw fetched-yield table.

use termcurve_core::{Date, Maturity};

use crate::error::{CurveError, CurveResult};

/// Header label for the series-name column when the raw table is rendered.
pub const SERIES_LABEL_HEADER: &str = "Yield Type";

/// One series row of the raw table.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    name: String,
    maturity: Maturity,
    values: Vec<Option<f64>>,
}

impl SeriesRow {
    /// Returns the series display name (e.g. "10-year").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the maturity derived from the series name.
    #[must_use]
    pub fn maturity(&self) -> Maturity {
        self.maturity
    }

    /// Returns the fetched values, aligned with the table's date list.
    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }
}

/// Fetched yields: one row per configured series, one column per target
/// date, in configured order. A cell is absent where the fetch failed.
///
/// # Example
///
/// ```rust
/// use termcurve_core::{Date, Maturity};
/// use termcurve_curves::RawYieldTable;
///
/// let dates = vec![Date::parse_mdy("01/02/2024").unwrap()];
/// let mut table = RawYieldTable::new(dates);
/// table
///     .push_row("10-year", Maturity::from_years(10), vec![Some(4.50)])
///     .unwrap();
/// assert_eq!(table.rows().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RawYieldTable {
    dates: Vec<Date>,
    rows: Vec<SeriesRow>,
}

impl RawYieldTable {
    /// Creates an empty table over the given date columns.
    #[must_use]
    pub fn new(dates: Vec<Date>) -> Self {
        Self {
            dates,
            rows: Vec::new(),
        }
    }

    /// Appends a series row.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of values does not match the number of
    /// date columns.
    pub fn push_row(
        &mut self,
        name: impl Into<String>,
        maturity: Maturity,
        values: Vec<Option<f64>>,
    ) -> CurveResult<()> {
        let name = name.into();
        if values.len() != self.dates.len() {
            return Err(CurveError::row_length_mismatch(
                name,
                self.dates.len(),
                values.len(),
            ));
        }

        self.rows.push(SeriesRow {
            name,
            maturity,
            values,
        });
        Ok(())
    }

    /// Returns the date columns.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the series rows in configured order.
    #[must_use]
    pub fn rows(&self) -> &[SeriesRow] {
        &self.rows
    }

    /// Returns true if the table has no series rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
