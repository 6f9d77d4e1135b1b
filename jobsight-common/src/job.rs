use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;

/// Lifecycle state reported for a job.
///
/// Parsed case-insensitively; states outside the known set are kept verbatim
/// in [`JobState::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    Running,
    Accepted,
    Succeeded,
    Killed,
    Failed,
    Error,
    Other(String),
}

/// States of jobs that still occupy the cluster.
pub const ACTIVE_STATES: &[JobState] = &[JobState::Running, JobState::Accepted];

/// Terminal states.
pub const FINISHED_STATES: &[JobState] = &[
    JobState::Succeeded,
    JobState::Killed,
    JobState::Failed,
    JobState::Error,
];

/// Terminal states that did not end in success.
pub const FAILED_STATES: &[JobState] = &[JobState::Failed, JobState::Killed, JobState::Error];

impl JobState {
    /// Get the canonical upper-case name.
    pub fn as_str(&self) -> &str {
        match self {
            JobState::Running => "RUNNING",
            JobState::Accepted => "ACCEPTED",
            JobState::Succeeded => "SUCCEEDED",
            JobState::Killed => "KILLED",
            JobState::Failed => "FAILED",
            JobState::Error => "ERROR",
            JobState::Other(s) => s,
        }
    }

    /// Check if the job is running or waiting to run.
    pub fn is_active(&self) -> bool {
        ACTIVE_STATES.contains(self)
    }

    /// Check if the job has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        FINISHED_STATES.contains(self)
    }

    /// Check if the job ended without succeeding.
    pub fn is_failed(&self) -> bool {
        FAILED_STATES.contains(self)
    }

    /// Get the label style used to badge this state.
    pub fn label_style(&self) -> LabelStyle {
        match self {
            JobState::Accepted | JobState::Succeeded => LabelStyle::Success,
            JobState::Killed => LabelStyle::Warning,
            JobState::Failed | JobState::Error => LabelStyle::Danger,
            JobState::Running => LabelStyle::Primary,
            JobState::Other(_) => LabelStyle::Default,
        }
    }
}

impl FromStr for JobState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let state = match s.to_ascii_lowercase().as_str() {
            "running" => JobState::Running,
            "accepted" => JobState::Accepted,
            "succeeded" => JobState::Succeeded,
            "killed" => JobState::Killed,
            "failed" => JobState::Failed,
            "error" => JobState::Error,
            _ => JobState::Other(s.to_string()),
        };
        Ok(state)
    }
}

impl From<String> for JobState {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(state) => state,
            Err(never) => match never {},
        }
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual emphasis of a state badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    Success,
    Warning,
    Danger,
    Primary,
    Default,
}

impl LabelStyle {
    /// Get the CSS suffix used in `label-<style>` classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelStyle::Success => "success",
            LabelStyle::Warning => "warning",
            LabelStyle::Danger => "danger",
            LabelStyle::Primary => "primary",
            LabelStyle::Default => "default",
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A job as reported by the cluster's resource manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Application/job identifier (e.g., "application_1460000000000_0042").
    pub id: String,

    /// Submitted job name, usually including a tag and a qualified class name.
    pub name: String,

    /// Current state.
    pub state: JobState,

    /// Submitting user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Unix epoch milliseconds when the job started.
    pub start_time: i64,

    /// Wall-clock run time in milliseconds.
    #[serde(default)]
    pub elapsed: u64,

    /// Comma-separated input paths, possibly with `hdfs://` authorities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_path: Option<String>,
}

impl JobRecord {
    /// Create a new job record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, state: JobState) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state,
            user: None,
            start_time: 0,
            elapsed: 0,
            input_path: None,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_timing(mut self, start_time: i64, elapsed: u64) -> Self {
        self.start_time = start_time;
        self.elapsed = elapsed;
        self
    }

    pub fn with_input_path(mut self, path: impl Into<String>) -> Self {
        self.input_path = Some(path.into());
        self
    }
}

/// Parse a JSON array of job records.
pub fn parse_jobs(json: &str) -> Result<Vec<JobRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("RUNNING".parse::<JobState>().unwrap(), JobState::Running);
        assert_eq!("succeeded".parse::<JobState>().unwrap(), JobState::Succeeded);
        assert_eq!("Killed".parse::<JobState>().unwrap(), JobState::Killed);
        assert_eq!(
            "NEW_SAVING".parse::<JobState>().unwrap(),
            JobState::Other("NEW_SAVING".to_string())
        );
    }

    #[test]
    fn test_state_groups() {
        assert!(JobState::Running.is_active());
        assert!(JobState::Accepted.is_active());
        assert!(!JobState::Running.is_finished());

        assert!(JobState::Succeeded.is_finished());
        assert!(!JobState::Succeeded.is_failed());

        for state in FAILED_STATES {
            assert!(state.is_finished());
            assert!(state.is_failed());
        }

        let other = JobState::Other("NEW".to_string());
        assert!(!other.is_active() && !other.is_finished() && !other.is_failed());
    }

    #[test]
    fn test_label_styles() {
        assert_eq!(JobState::Accepted.label_style(), LabelStyle::Success);
        assert_eq!(JobState::Succeeded.label_style(), LabelStyle::Success);
        assert_eq!(JobState::Killed.label_style(), LabelStyle::Warning);
        assert_eq!(JobState::Failed.label_style(), LabelStyle::Danger);
        assert_eq!(JobState::Error.label_style(), LabelStyle::Danger);
        assert_eq!(JobState::Running.label_style(), LabelStyle::Primary);
        assert_eq!(
            JobState::Other("NEW".to_string()).label_style(),
            LabelStyle::Default
        );
    }

    #[test]
    fn test_record_json() {
        let json = r#"{
            "id": "application_1_0001",
            "name": "[ETL/2] com.example.etl.DailyRollup (42)",
            "state": "running",
            "start_time": 1460000000000,
            "elapsed": 65000
        }"#;

        let record: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.state, JobState::Running);
        assert_eq!(record.elapsed, 65_000);
        assert!(record.user.is_none());

        let encoded = serde_json::to_value(&record).unwrap();
        assert_eq!(encoded["state"], "RUNNING");
        assert!(encoded.get("input_path").is_none());
    }

    #[test]
    fn test_parse_jobs_rejects_malformed() {
        assert!(matches!(parse_jobs("[{"), Err(crate::Error::Json(_))));
        assert!(parse_jobs("[]").unwrap().is_empty());
    }
}
