//! JobSight - render job monitoring data from the command line.
//!
//! Reads job records or chart points as JSON and prints tables or
//! decimated series.

use clap::Parser;

use jobsight::{Cli, commands};
use jobsight_common::{AppConfig, init_tracing};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration, then apply CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config.logging)?;
    tracing::debug!(config = ?cli.config, "Starting JobSight");

    let output = commands::run(&cli.command, &config)?;
    println!("{}", output);

    Ok(())
}
