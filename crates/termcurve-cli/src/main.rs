//! Termcurve CLI - historical government bond yield curve snapshots.
//!
//! # Usage
//!
//! ```bash
//! # Snapshot the curves configured in config/termcurve.toml
//! termcurve
//!
//! # Use a different configuration and output location
//! termcurve --config my-run.toml --output curves.csv
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;
mod snapshot;
mod writer;

use cli::Cli;
use config::SnapshotConfig;
use termcurve_feed::YahooChartSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,termcurve=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();

    info!("termcurve v{}", env!("CARGO_PKG_VERSION"));
    info!("Loading configuration from {}", args.config);

    let mut config = SnapshotConfig::from_file(&args.config)
        .with_context(|| format!("cannot load configuration from {}", args.config))?;

    if let Some(output) = args.output {
        config.output_path = output;
    }

    let plan = config.resolve()?;
    let source = YahooChartSource::new()?;

    snapshot::run(&plan, &source).await
}
