//! CSV output for the raw and interpolated tables.

use std::path::Path;

use termcurve_curves::{RawYieldTable, YieldGrid, SERIES_LABEL_HEADER};

use crate::error::CliResult;

/// Header label for the maturity column of the interpolated table.
const MATURITY_HEADER: &str = "Maturity";

/// Writes the interpolated grid: "Maturity" plus one column per configured
/// date label; one row per maturity, labelled "<N>-year". Absent cells are
/// written empty. Overwrites any existing file.
pub fn write_grid(grid: &YieldGrid, date_labels: &[String], path: &Path) -> CliResult<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![MATURITY_HEADER.to_string()];
    header.extend(date_labels.iter().cloned());
    writer.write_record(&header)?;

    for (maturity, cells) in grid.rows() {
        let mut record = vec![maturity.label()];
        record.extend(cells.iter().map(format_cell));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the raw fetched table: "Yield Type" plus one column per date
/// label; one row per configured series. Overwrites any existing file.
pub fn write_raw(table: &RawYieldTable, date_labels: &[String], path: &Path) -> CliResult<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![SERIES_LABEL_HEADER.to_string()];
    header.extend(date_labels.iter().cloned());
    writer.write_record(&header)?;

    for row in table.rows() {
        let mut record = vec![row.name().to_string()];
        record.extend(row.values().iter().map(format_cell));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn format_cell(value: &Option<f64>) -> String {
    value.map_or_else(String::new, |v| format!("{v:.2}"))
}
