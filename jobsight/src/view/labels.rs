//! State badges and the chart colour palette.

use jobsight_common::JobState;

/// Fill for map tasks.
pub const COLOUR_MAP: &str = "rgb(91, 192, 222)";
/// Fill for reduce tasks.
pub const COLOUR_REDUCE: &str = "#E86482";
/// Fill for the selected task.
pub const COLOUR_SELECTED: &str = "rgb(100, 232, 130)";
/// Fill for the task under the pointer.
pub const COLOUR_HOVER: &str = "rgb(100, 232, 200)";

/// Kind of task drawn in a job's task chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Map,
    Reduce,
}

impl TaskKind {
    /// Get the fill colour for this kind of task.
    pub fn colour(&self) -> &'static str {
        match self {
            TaskKind::Map => COLOUR_MAP,
            TaskKind::Reduce => COLOUR_REDUCE,
        }
    }
}

/// CSS classes for a state badge, e.g. `"label label-danger"`.
pub fn state_label_class(state: &JobState) -> String {
    format!("label label-{}", state.label_style())
}

/// Render a state badge as an HTML span.
pub fn render_state_label(state: &JobState) -> String {
    format!(
        r#"<span class="{}">{}</span>"#,
        state_label_class(state),
        escape_html(state.as_str())
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
