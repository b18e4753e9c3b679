mod bytes;
mod cli;
mod config;
mod error;
mod file_system;
mod output;
mod report;
mod utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::Args,
    config::Config,
    output::{palette::Palette, progress::scan_progress_bar, terminal::StdoutWidth},
    report::print_report,
};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the chart.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    let config: Config = Args::parse().into();
    tracing::debug!(dir = %config.dir.display(), "starting scan");

    print_report(
        &config,
        &StdoutWidth,
        Palette::ansi(),
        &scan_progress_bar(),
    )?;

    Ok(())
}
