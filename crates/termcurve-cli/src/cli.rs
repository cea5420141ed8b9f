//! CLI argument definitions.

use clap::Parser;

/// Termcurve - government bond yield curve snapshots
#[derive(Parser, Debug)]
#[command(name = "termcurve")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the snapshot configuration (TOML)
    #[arg(short, long, default_value = "config/termcurve.toml")]
    pub config: String,

    /// Override the configured output file path
    #[arg(short, long)]
    pub output: Option<String>,
}
