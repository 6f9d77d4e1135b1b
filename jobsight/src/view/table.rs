//! Plain-text job table.

use jobsight_common::JobRecord;

use super::formatting::{format_time, human_format, second_format};
use super::names::{clean_job_name, clean_job_path, job_label, strip_hadoop_prefix};

const HEADERS: [&str; 8] = [
    "ID", "LABEL", "NAME", "STATE", "STARTED", "ELAPSED", "DURATION", "INPUT",
];

/// Display cells for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub id: String,
    pub label: String,
    pub name: String,
    pub state: String,
    pub started: String,
    pub elapsed: String,
    pub duration: String,
    pub input: String,
}

impl JobRow {
    /// Build the display cells for a job.
    pub fn from_record(job: &JobRecord) -> Self {
        Self {
            id: strip_hadoop_prefix(&job.id),
            label: job_label(&job.name).unwrap_or("-").to_string(),
            name: clean_job_name(&job.name),
            state: job.state.to_string(),
            started: format_time(job.start_time),
            elapsed: second_format(job.elapsed),
            duration: human_format(job.elapsed),
            input: clean_job_path(job.input_path.as_deref()).unwrap_or_else(|| "-".to_string()),
        }
    }

    fn cells(&self) -> [&str; 8] {
        [
            self.id.as_str(),
            self.label.as_str(),
            self.name.as_str(),
            self.state.as_str(),
            self.started.as_str(),
            self.elapsed.as_str(),
            self.duration.as_str(),
            self.input.as_str(),
        ]
    }
}

/// Render jobs as an aligned text table with a header row.
pub fn render_table(jobs: &[JobRecord]) -> String {
    let rows: Vec<JobRow> = jobs.iter().map(JobRow::from_record).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_line(&HEADERS, &widths));
    for row in &rows {
        lines.push(render_line(&row.cells(), &widths));
    }
    lines.join("\n")
}

fn render_line(cells: &[&str; 8], widths: &[usize; 8]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
