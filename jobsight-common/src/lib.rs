//! JobSight Common Library
//!
//! This crate provides shared types and utilities for the JobSight job monitor:
//!
//! - [`job`] - Job data model (`JobRecord`, `JobState`, `LabelStyle`)
//! - [`sample`] - Largest-per-bucket decimation for chart series
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod job;
pub mod sample;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, ChartConfig, LogFormat, LoggingConfig, load_config, parse_config};
pub use error::{Error, Result};
pub use job::{
    ACTIVE_STATES, FAILED_STATES, FINISHED_STATES, JobRecord, JobState, LabelStyle, parse_jobs,
};
pub use sample::{bucket_ranges, sample, sample_by, sample_by_key};

/// Initialize tracing with the given configuration.
///
/// `RUST_LOG` takes precedence over the configured level. Supports two
/// output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialized");

    Ok(())
}
