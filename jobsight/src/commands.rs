//! Subcommand implementations. Each returns the text to print on stdout.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use jobsight_common::{AppConfig, parse_jobs};

use crate::args::Command;
use crate::view::chart::{ChartSeries, DataPoint};
use crate::view::table::render_table;

/// Run a parsed subcommand against the loaded configuration.
pub fn run(command: &Command, config: &AppConfig) -> Result<String> {
    match command {
        Command::Sample { input, limit } => {
            let limit = limit.unwrap_or(config.chart.max_points);
            sample_points(&read_input(input)?, limit)
        }
        Command::Jobs { input, active } => jobs_table(&read_input(input)?, *active),
    }
}

/// Read a whole input file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    let mut content = String::new();
    if path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
    } else {
        content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
    }
    Ok(content)
}

/// Decimate a JSON array of points and return it as pretty JSON.
pub fn sample_points(json: &str, limit: usize) -> Result<String> {
    let points: Vec<DataPoint> =
        serde_json::from_str(json).context("Failed to parse chart points")?;
    let series = ChartSeries::with_data("input", points);

    let reduced = series.decimate(limit)?;
    tracing::info!(
        input = series.len(),
        output = reduced.len(),
        limit,
        "Sampled chart points"
    );

    Ok(serde_json::to_string_pretty(&reduced)?)
}

/// Render a JSON array of job records as a text table.
pub fn jobs_table(json: &str, active_only: bool) -> Result<String> {
    let mut jobs = parse_jobs(json).context("Failed to parse job records")?;
    let total = jobs.len();

    if active_only {
        jobs.retain(|job| job.state.is_active());
    }
    tracing::info!(total, shown = jobs.len(), "Rendering job table");

    Ok(render_table(&jobs))
}
