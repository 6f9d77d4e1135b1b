//! Command-line argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// JobSight command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "jobsight", version, about = "Render job monitoring data for display")]
pub struct Cli {
    /// Path to configuration file (JSON5). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decimate a JSON array of chart points, keeping the peak of each bucket.
    Sample {
        /// Input file, or "-" for stdin.
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Maximum number of points to keep (defaults to chart.max_points).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print a JSON array of job records as a table.
    Jobs {
        /// Input file, or "-" for stdin.
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Only show running and accepted jobs.
        #[arg(long)]
        active: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample() {
        let cli = Cli::parse_from(["jobsight", "sample", "--input", "points.json", "-l", "50"]);
        match cli.command {
            Command::Sample { input, limit } => {
                assert_eq!(input, PathBuf::from("points.json"));
                assert_eq!(limit, Some(50));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_jobs_defaults() {
        let cli = Cli::parse_from(["jobsight", "jobs", "--log-level", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.config.is_none());
        match cli.command {
            Command::Jobs { input, active } => {
                assert_eq!(input, PathBuf::from("-"));
                assert!(!active);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
