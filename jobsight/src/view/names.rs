//! Cleanup of job identifiers, names and input paths for display.

use once_cell::sync::Lazy;
use regex::Regex;

/// Framework prefix on application/job identifiers.
static HADOOP_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"application|job").unwrap());

/// Submission tag such as `[ETL/2] ` at the start of a name.
static JOB_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[A-Z0-9/]+\]\s+").unwrap());

/// Dotted qualifier of ASCII words; group 1 holds only the last `segment.`
static QUALIFIED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z0-9_]+\.)+([A-Za-z0-9_]+)").unwrap());

/// `hdfs://namenode.example.com:8020` authority.
static HDFS_AUTHORITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"hdfs://[A-Za-z0-9_]+(\.[A-Za-z0-9_]+)*:[0-9]+").unwrap());

/// Run number in parentheses following a non-empty name prefix.
static LABEL_AFTER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^(]+\(([0-9]+)").unwrap());

/// Run number in parentheses anywhere in the name.
static LABEL_ANYWHERE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([0-9]+)").unwrap());

/// Remove the first `application` or `job` from an identifier.
///
/// `application_1460000000000_0042` becomes `_1460000000000_0042`.
pub fn strip_hadoop_prefix(id: &str) -> String {
    HADOOP_PREFIX.replace(id, "").into_owned()
}

/// Shorten a submitted job name for display.
///
/// Drops a leading `[TAG/N] ` marker and collapses the first dotted
/// qualifier to its last two segments, so
/// `[ETL/2] com.example.etl.DailyRollup (42)` becomes `etl.DailyRollup (42)`.
pub fn clean_job_name(name: &str) -> String {
    let untagged = JOB_TAG.replace(name, "");
    QUALIFIED_NAME.replace(&untagged, "${1}${2}").into_owned()
}

/// Strip `hdfs://host:port` authorities and space out the first comma.
///
/// `None` passes through unchanged.
pub fn clean_job_path(path: Option<&str>) -> Option<String> {
    path.map(|p| HDFS_AUTHORITY.replace_all(p, "").replacen(',', ", ", 1))
}

/// Extract the numeric run label from a job name, e.g. `42` from
/// `DailyRollup (42)`.
///
/// The digits after the first `(` are preferred when the name has a prefix;
/// otherwise the first `(digits` anywhere is used.
pub fn job_label(name: &str) -> Option<&str> {
    LABEL_AFTER_PREFIX
        .captures(name)
        .or_else(|| LABEL_ANYWHERE.captures(name))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
