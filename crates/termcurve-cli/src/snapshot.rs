//! The snapshot run: fetch, assemble, interpolate, write.

use anyhow::Result;
use tracing::{debug, info, warn};

use termcurve_core::Date;
use termcurve_curves::{CurveError, RawYieldTable, YieldGrid};
use termcurve_feed::{fetch_yield, PriceHistorySource};

use crate::config::SnapshotPlan;
use crate::writer;

/// Executes a snapshot: builds the raw table, interpolates the grid, and
/// writes the configured outputs.
///
/// Individual fetch failures are logged and leave absent cells; the run
/// only aborts on configuration or output errors.
pub async fn run(plan: &SnapshotPlan, source: &dyn PriceHistorySource) -> Result<()> {
    let table = build_raw_table(plan, source).await?;
    let grid = YieldGrid::build(&table)?;

    let labels = plan.date_labels();

    if let Some(path) = &plan.raw_output_path {
        writer::write_raw(&table, &labels, path)?;
        info!("Raw yield table saved to {}", path.display());
    }

    writer::write_grid(&grid, &labels, &plan.output_path)?;
    info!("Results saved to {}", plan.output_path.display());

    Ok(())
}

/// Fetches every configured (series, date) cell sequentially.
///
/// A failed fetch is logged and recorded as an absent cell; no row or date
/// is skipped because one cell failed.
pub async fn build_raw_table(
    plan: &SnapshotPlan,
    source: &dyn PriceHistorySource,
) -> Result<RawYieldTable, CurveError> {
    let dates: Vec<Date> = plan.dates.iter().map(|c| c.date).collect();
    let mut table = RawYieldTable::new(dates);

    for series in &plan.series {
        let mut values = Vec::with_capacity(plan.dates.len());
        for column in &plan.dates {
            match fetch_yield(source, &series.symbol, column.date).await {
                Ok(value) => {
                    debug!(series = %series.name, date = %column.label, value, "fetched yield");
                    values.push(Some(value));
                }
                Err(e) => {
                    warn!(
                        series = %series.name,
                        date = %column.label,
                        error = %e,
                        "fetch failed, recording missing value"
                    );
                    values.push(None);
                }
            }
        }
        table.push_row(series.name.clone(), series.maturity, values)?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DateColumn, PlannedSeries, SnapshotPlan};
    use termcurve_core::Maturity;
    use termcurve_feed::{ClosePoint, InMemoryHistorySource};

    fn plan_for(dir: &std::path::Path) -> SnapshotPlan {
        SnapshotPlan {
            series: vec![
                PlannedSeries {
                    name: "1-year".to_string(),
                    symbol: "^IRX".to_string(),
                    maturity: Maturity::from_years(1),
                },
                PlannedSeries {
                    name: "10-year".to_string(),
                    symbol: "^TNX".to_string(),
                    maturity: Maturity::from_years(10),
                },
            ],
            dates: vec![DateColumn {
                label: "01/02/2024".to_string(),
                date: Date::parse_mdy("01/02/2024").unwrap(),
            }],
            output_path: dir.join("curves.csv"),
            raw_output_path: Some(dir.join("raw.csv")),
        }
    }

    fn jan2() -> Date {
        Date::from_ymd(2024, 1, 2).unwrap()
    }

    #[tokio::test]
    async fn test_snapshot_end_to_end() {
        let source = InMemoryHistorySource::new()
            .with_series("^IRX", vec![ClosePoint::new(jan2(), 5.00)])
            .with_series("^TNX", vec![ClosePoint::new(jan2(), 4.50)]);

        let dir = tempfile::tempdir().unwrap();
        let plan = plan_for(dir.path());

        run(&plan, &source).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("curves.csv")).unwrap();
        let expected = "Maturity,01/02/2024\n\
                        1-year,5.00\n\
                        2-year,4.94\n\
                        3-year,4.89\n\
                        4-year,4.83\n\
                        5-year,4.78\n\
                        6-year,4.72\n\
                        7-year,4.67\n\
                        8-year,4.61\n\
                        9-year,4.56\n\
                        10-year,4.50\n";
        assert_eq!(content, expected);

        let raw = std::fs::read_to_string(dir.path().join("raw.csv")).unwrap();
        assert_eq!(raw, "Yield Type,01/02/2024\n1-year,5.00\n10-year,4.50\n");
    }

    #[tokio::test]
    async fn test_snapshot_with_failed_series_goes_flat() {
        // 1-year has no data anywhere; the 10-year quote pins the curve flat.
        let source = InMemoryHistorySource::new()
            .with_series("^TNX", vec![ClosePoint::new(jan2(), 4.50)]);

        let dir = tempfile::tempdir().unwrap();
        let plan = plan_for(dir.path());

        run(&plan, &source).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("curves.csv")).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Maturity,01/02/2024"));
        for (maturity, line) in (1..=10).zip(lines) {
            assert_eq!(line, format!("{maturity}-year,4.50"));
        }

        let raw = std::fs::read_to_string(dir.path().join("raw.csv")).unwrap();
        assert_eq!(raw, "Yield Type,01/02/2024\n1-year,\n10-year,4.50\n");
    }

    #[tokio::test]
    async fn test_raw_table_keeps_all_cells_on_partial_failure() {
        let source = InMemoryHistorySource::new()
            .with_series("^TNX", vec![ClosePoint::new(jan2(), 4.50)]);

        let dir = tempfile::tempdir().unwrap();
        let plan = plan_for(dir.path());

        let table = build_raw_table(&plan, &source).await.unwrap();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].values(), &[None]);
        assert_eq!(table.rows()[1].values(), &[Some(4.50)]);
    }
}
