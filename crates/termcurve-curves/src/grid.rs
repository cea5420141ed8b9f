//! The interpolated maturity × date yield grid.

use std::collections::{BTreeMap, BTreeSet};

use termcurve_core::{Date, Maturity};
use termcurve_math::interpolation::{Interpolator, LinearInterpolator};
use termcurve_math::round_dp;

use crate::error::{CurveError, CurveResult};
use crate::table::{RawYieldTable, SeriesRow};

/// The interpolated yield curve grid: one row per maturity, one column per
/// target date.
///
/// The maturity axis is the sorted union of every configured series'
/// maturity and every whole year from 1 up to the longest of them. Per
/// date, directly quoted maturities keep their fetched value (averaged when
/// several series quote the same maturity) and the rest are linearly
/// interpolated, clamped flat at the boundaries, and rounded to two decimal
/// places. A date with no successful fetch at all has an entirely absent
/// column.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldGrid {
    maturities: Vec<Maturity>,
    dates: Vec<Date>,
    cells: Vec<Vec<Option<f64>>>,
}

impl YieldGrid {
    /// Builds the grid from a raw fetched-yield table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table has no series rows or if a date
    /// column's known quotes cannot form an interpolator.
    pub fn build(table: &RawYieldTable) -> CurveResult<Self> {
        if table.is_empty() {
            return Err(CurveError::EmptyTable);
        }

        let maturities = maturity_grid(table.rows());
        let mut cells = vec![vec![None; table.dates().len()]; maturities.len()];

        for col in 0..table.dates().len() {
            let known = known_pairs(table.rows(), col);
            if known.is_empty() {
                continue;
            }

            let column = interpolate_column(&known, &maturities, col)?;
            for (row, value) in column.into_iter().enumerate() {
                cells[row][col] = value;
            }
        }

        Ok(Self {
            maturities,
            dates: table.dates().to_vec(),
            cells,
        })
    }

    /// Returns the maturity axis, ascending.
    #[must_use]
    pub fn maturities(&self) -> &[Maturity] {
        &self.maturities
    }

    /// Returns the date columns.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Iterates the grid rows as (maturity, cells) pairs.
    pub fn rows(&self) -> impl Iterator<Item = (Maturity, &[Option<f64>])> {
        self.maturities
            .iter()
            .copied()
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    /// Returns the cell for a maturity and date column, if both exist and
    /// the cell is populated.
    #[must_use]
    pub fn value(&self, maturity: Maturity, col: usize) -> Option<f64> {
        let row = self.maturities.iter().position(|m| *m == maturity)?;
        self.cells.get(row)?.get(col).copied().flatten()
    }
}

/// The sorted union of the series maturities and every whole year from 1 to
/// the longest of them.
fn maturity_grid(rows: &[SeriesRow]) -> Vec<Maturity> {
    let mut set: BTreeSet<Maturity> = rows.iter().map(SeriesRow::maturity).collect();
    let max_years = set.iter().next_back().map_or(0, Maturity::years);
    for years in 1..=max_years {
        set.insert(Maturity::from_years(years));
    }
    set.into_iter().collect()
}

/// Collects the known (maturity, yield) pairs for one date column, averaging
/// duplicate quotes per maturity. Sorted ascending by maturity.
fn known_pairs(rows: &[SeriesRow], col: usize) -> Vec<(Maturity, f64)> {
    let mut sums: BTreeMap<Maturity, (f64, u32)> = BTreeMap::new();
    for row in rows {
        if let Some(value) = row.values()[col] {
            let entry = sums.entry(row.maturity()).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(maturity, (sum, count))| (maturity, sum / f64::from(count)))
        .collect()
}

/// Fills one date column: known maturities keep their value, the rest are
/// interpolated and rounded.
fn interpolate_column(
    known: &[(Maturity, f64)],
    grid: &[Maturity],
    col: usize,
) -> CurveResult<Vec<Option<f64>>> {
    // A single quoted point pins the whole curve flat.
    if let [(only_maturity, only_value)] = known {
        return Ok(grid
            .iter()
            .map(|m| {
                if m == only_maturity {
                    Some(*only_value)
                } else {
                    Some(round_dp(*only_value, 2))
                }
            })
            .collect());
    }

    let xs: Vec<f64> = known.iter().map(|(m, _)| m.as_f64()).collect();
    let ys: Vec<f64> = known.iter().map(|(_, v)| *v).collect();
    let interpolator = LinearInterpolator::new(xs, ys)
        .map_err(|e| CurveError::interpolation_failed(col, e.to_string()))?;

    Ok(grid
        .iter()
        .map(|m| {
            if let Some((_, value)) = known.iter().find(|(km, _)| km == m) {
                Some(*value)
            } else {
                Some(round_dp(interpolator.value_at(m.as_f64()), 2))
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn years(n: u32) -> Maturity {
        Maturity::from_years(n)
    }

    fn one_date_table(rows: &[(&str, u32, Option<f64>)]) -> RawYieldTable {
        let dates = vec![Date::parse_mdy("01/02/2024").unwrap()];
        let mut table = RawYieldTable::new(dates);
        for (name, maturity, value) in rows {
            table
                .push_row(*name, years(*maturity), vec![*value])
                .unwrap();
        }
        table
    }

    #[test]
    fn test_two_point_curve() {
        let table = one_date_table(&[
            ("1-year", 1, Some(5.00)),
            ("10-year", 10, Some(4.50)),
        ]);
        let grid = YieldGrid::build(&table).unwrap();

        let labels: Vec<String> = grid.maturities().iter().map(Maturity::label).collect();
        assert_eq!(
            labels,
            vec![
                "1-year", "2-year", "3-year", "4-year", "5-year", "6-year", "7-year", "8-year",
                "9-year", "10-year"
            ]
        );

        // Endpoints keep the quoted values.
        assert_eq!(grid.value(years(1), 0), Some(5.00));
        assert_eq!(grid.value(years(10), 0), Some(4.50));

        // Interior maturities interpolate linearly, rounded to 2dp.
        let expected = [4.94, 4.89, 4.83, 4.78, 4.72, 4.67, 4.61, 4.56];
        for (maturity, want) in (2..=9).zip(expected) {
            assert_eq!(grid.value(years(maturity), 0), Some(want));
        }
    }

    #[test]
    fn test_interpolated_value_rounds() {
        // (1, 4.0) and (10, 5.0): maturity 5 is 4.4444..., published as 4.44.
        let table = one_date_table(&[
            ("1-year", 1, Some(4.0)),
            ("10-year", 10, Some(5.0)),
        ]);
        let grid = YieldGrid::build(&table).unwrap();
        assert_eq!(grid.value(years(5), 0), Some(4.44));
    }

    #[test]
    fn test_known_value_is_never_recomputed() {
        // A quoted value with more than two decimals passes through exactly.
        let table = one_date_table(&[
            ("1-year", 1, Some(4.125)),
            ("5-year", 5, Some(4.375)),
            ("10-year", 10, Some(5.0)),
        ]);
        let grid = YieldGrid::build(&table).unwrap();
        assert_eq!(grid.value(years(5), 0), Some(4.375));
    }

    #[test]
    fn test_duplicate_maturities_average() {
        let dates = vec![Date::parse_mdy("01/02/2024").unwrap()];
        let mut table = RawYieldTable::new(dates);
        table
            .push_row("5-year", years(5), vec![Some(4.0)])
            .unwrap();
        table
            .push_row("5-year-otr", years(5), vec![Some(5.0)])
            .unwrap();
        table
            .push_row("10-year", years(10), vec![Some(5.0)])
            .unwrap();

        let grid = YieldGrid::build(&table).unwrap();
        // The averaged quote, not either input and not both.
        assert_eq!(grid.value(years(5), 0), Some(4.5));
        // Interpolation below the shortest known maturity clamps flat.
        assert_eq!(grid.value(years(1), 0), Some(4.5));
    }

    #[test]
    fn test_flat_clamp_below_shortest_quote() {
        let table = one_date_table(&[
            ("3-year", 3, Some(4.20)),
            ("10-year", 10, Some(4.90)),
        ]);
        let grid = YieldGrid::build(&table).unwrap();

        assert_eq!(grid.value(years(1), 0), Some(4.20));
        assert_eq!(grid.value(years(2), 0), Some(4.20));
        assert_relative_eq!(grid.value(years(3), 0).unwrap(), 4.20, epsilon = 1e-12);
    }

    #[test]
    fn test_single_quote_fills_flat() {
        let table = one_date_table(&[
            ("1-year", 1, None),
            ("10-year", 10, Some(4.50)),
        ]);
        let grid = YieldGrid::build(&table).unwrap();

        for maturity in 1..=10 {
            assert_eq!(grid.value(years(maturity), 0), Some(4.50));
        }
    }

    #[test]
    fn test_empty_date_column_stays_absent() {
        let dates = vec![
            Date::parse_mdy("01/02/2024").unwrap(),
            Date::parse_mdy("02/01/2024").unwrap(),
        ];
        let mut table = RawYieldTable::new(dates);
        table
            .push_row("1-year", years(1), vec![None, Some(5.00)])
            .unwrap();
        table
            .push_row("10-year", years(10), vec![None, Some(4.50)])
            .unwrap();

        let grid = YieldGrid::build(&table).unwrap();

        for maturity in 1..=10 {
            assert_eq!(grid.value(years(maturity), 0), None);
        }
        assert_eq!(grid.value(years(1), 1), Some(5.00));
    }

    #[test]
    fn test_grid_matches_raw_for_known_maturities() {
        let table = one_date_table(&[
            ("1-year", 1, Some(5.21)),
            ("5-year", 5, Some(4.93)),
            ("10-year", 10, Some(4.50)),
        ]);
        let grid = YieldGrid::build(&table).unwrap();

        for row in table.rows() {
            assert_eq!(grid.value(row.maturity(), 0), row.values()[0]);
        }
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let table = RawYieldTable::new(vec![Date::parse_mdy("01/02/2024").unwrap()]);
        assert_eq!(YieldGrid::build(&table).unwrap_err(), CurveError::EmptyTable);
    }

    #[test]
    fn test_maturity_grid_union() {
        let table = one_date_table(&[
            ("2-year", 2, Some(4.0)),
            ("7-year", 7, Some(4.5)),
        ]);
        let grid = YieldGrid::build(&table).unwrap();
        let grid_years: Vec<u32> = grid.maturities().iter().map(Maturity::years).collect();
        assert_eq!(grid_years, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
