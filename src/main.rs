//! instance-analyzer — per-category instance size report and boxplot.
//!
//! Thin binary entry point. All logic lives in the `instance-analyzer-core`
//! and `instance-analyzer-viz` crates.

mod cli;

use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let config = cli.into_config();
    tracing::info!("instance-analyzer starting");

    let mut stdout = std::io::stdout().lock();
    instance_analyzer_viz::run(&config, &mut stdout)
        .with_context(|| format!("analysis of {} failed", config.data_dir.display()))?;

    Ok(())
}
