//! JobSight - presentation helpers for job monitoring.
//!
//! This library exposes the view helpers and subcommands for testing.

pub mod args;
pub mod commands;
pub mod view;

// Re-export commonly used types
pub use args::{Cli, Command};
pub use view::chart::{ChartSeries, ChartStats, DataPoint};
