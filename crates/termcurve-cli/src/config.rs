//! Snapshot configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use termcurve_core::{Date, Maturity};

use crate::error::{CliError, CliResult};

/// Snapshot configuration as written in the TOML file.
///
/// The configuration is loaded once and passed explicitly through the run;
/// nothing reads it as ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Series to fetch, in output row order of the raw table.
    #[serde(default)]
    pub series: Vec<SeriesConfig>,

    /// Target dates in MM/DD/YYYY format, in output column order.
    #[serde(default)]
    pub dates: Vec<String>,

    /// Where the interpolated curve table is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Optional location for a dump of the raw fetched table.
    pub raw_output_path: Option<String>,
}

/// One configured series: display name plus data-source symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Display name, e.g. "10-year". The leading integer is the maturity.
    pub name: String,
    /// Data-source identifier, e.g. "^TNX".
    pub symbol: String,
}

fn default_output_path() -> String {
    "output/treasury_yields.csv".to_string()
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            dates: Vec::new(),
            output_path: default_output_path(),
            raw_output_path: None,
        }
    }
}

impl SnapshotConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Validates the configuration and resolves it into a runnable plan:
    /// maturities derived from series names, dates parsed, paths fixed.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no series or no dates, if a series name
    /// has no leading-integer maturity, or if a date does not parse as
    /// MM/DD/YYYY.
    pub fn resolve(&self) -> CliResult<SnapshotPlan> {
        if self.series.is_empty() {
            return Err(CliError::Config("no series configured".to_string()));
        }
        if self.dates.is_empty() {
            return Err(CliError::Config("no target dates configured".to_string()));
        }

        let series = self
            .series
            .iter()
            .map(|s| {
                let maturity =
                    Maturity::parse_label(&s.name).map_err(|e| CliError::InvalidSeries {
                        name: s.name.clone(),
                        reason: e.to_string(),
                    })?;
                Ok(PlannedSeries {
                    name: s.name.clone(),
                    symbol: s.symbol.clone(),
                    maturity,
                })
            })
            .collect::<CliResult<Vec<_>>>()?;

        let dates = self
            .dates
            .iter()
            .map(|label| {
                let date = Date::parse_mdy(label)
                    .map_err(|_| CliError::InvalidDate(label.clone()))?;
                Ok(DateColumn {
                    label: label.clone(),
                    date,
                })
            })
            .collect::<CliResult<Vec<_>>>()?;

        Ok(SnapshotPlan {
            series,
            dates,
            output_path: PathBuf::from(&self.output_path),
            raw_output_path: self.raw_output_path.as_ref().map(PathBuf::from),
        })
    }
}

/// A validated, resolved snapshot configuration.
#[derive(Debug, Clone)]
pub struct SnapshotPlan {
    /// Series to fetch, with derived maturities.
    pub series: Vec<PlannedSeries>,
    /// Date columns: configured label plus parsed date.
    pub dates: Vec<DateColumn>,
    /// Interpolated table destination.
    pub output_path: PathBuf,
    /// Optional raw table destination.
    pub raw_output_path: Option<PathBuf>,
}

impl SnapshotPlan {
    /// Returns the configured date labels, in column order.
    #[must_use]
    pub fn date_labels(&self) -> Vec<String> {
        self.dates.iter().map(|c| c.label.clone()).collect()
    }
}

/// One series of the plan.
#[derive(Debug, Clone)]
pub struct PlannedSeries {
    /// Display name, e.g. "10-year".
    pub name: String,
    /// Data-source identifier.
    pub symbol: String,
    /// Maturity derived from the name.
    pub maturity: Maturity,
}

/// One target date column of the plan.
#[derive(Debug, Clone)]
pub struct DateColumn {
    /// The configured MM/DD/YYYY label, used verbatim as a column header.
    pub label: String,
    /// The parsed calendar date.
    pub date: Date,
}
