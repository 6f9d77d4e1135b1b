//! Time-series data behind job charts.

use serde::{Deserialize, Serialize};

use jobsight_common::sample_by_key;

use super::formatting::{format_time, format_value};

/// A data point for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Timestamp in milliseconds.
    pub timestamp: i64,
    /// Value of the plotted metric.
    pub value: f64,
}

impl DataPoint {
    /// Create a new data point.
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// A named series of points, kept sorted by timestamp.
#[derive(Debug, Clone, Default)]
pub struct ChartSeries {
    /// Chart title/metric name.
    title: String,
    /// The data points, oldest first.
    data: Vec<DataPoint>,
}

impl ChartSeries {
    /// Create an empty series.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            data: Vec::new(),
        }
    }

    /// Create a series from existing points.
    pub fn with_data(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        let mut series = Self::new(title);
        series.set_data(data);
        series
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Add a data point, keeping time order. Equal timestamps keep arrival order.
    pub fn push(&mut self, point: DataPoint) {
        let index = self
            .data
            .partition_point(|p| p.timestamp <= point.timestamp);
        self.data.insert(index, point);
    }

    /// Replace all data points.
    pub fn set_data(&mut self, mut data: Vec<DataPoint>) {
        data.sort_by_key(|p| p.timestamp);
        self.data = data;
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reduce the series to at most `limit` points, keeping the largest value
    /// in each time bucket so spikes stay visible.
    pub fn decimate(&self, limit: usize) -> jobsight_common::Result<Vec<DataPoint>> {
        let picked: Vec<DataPoint> = sample_by_key(&self.data, limit, |p| p.value)?
            .into_iter()
            .copied()
            .collect();

        if picked.len() < self.data.len() {
            tracing::debug!(
                series = %self.title,
                from = self.data.len(),
                to = picked.len(),
                "Decimated chart series"
            );
        }

        Ok(picked)
    }

    /// Get statistics for the series.
    pub fn stats(&self) -> ChartStats {
        if self.data.is_empty() {
            return ChartStats::default();
        }

        let sum: f64 = self.data.iter().map(|p| p.value).sum();
        let count = self.data.len();
        let avg = sum / count as f64;

        let min = self
            .data
            .iter()
            .map(|p| p.value)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .data
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);

        let current = self.data.last().map(|p| p.value);

        ChartStats {
            min,
            max,
            avg,
            current,
            count,
        }
    }

    /// One-line summary, e.g. `"containers: 12 pts, min 1, max 1.5K, avg 300.25, last Thu 00:00:05"`.
    pub fn summary(&self) -> String {
        let stats = self.stats();
        match self.data.last() {
            Some(last) => format!(
                "{}: {} pts, min {}, max {}, avg {}, last {}",
                self.title,
                stats.count,
                format_value(stats.min),
                format_value(stats.max),
                format_value(stats.avg),
                format_time(last.timestamp)
            ),
            None => format!("{}: no data", self.title),
        }
    }
}

/// Statistics for the chart data.
#[derive(Debug, Clone, Default)]
pub struct ChartStats {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// Average value.
    pub avg: f64,
    /// Current (most recent) value.
    pub current: Option<f64>,
    /// Number of data points.
    pub count: usize,
}
