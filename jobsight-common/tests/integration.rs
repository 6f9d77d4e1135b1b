//! Integration tests for jobsight-common library.

use jobsight_common::{
    AppConfig, Error, JobRecord, JobState, LabelStyle, bucket_ranges, parse_config, sample,
    sample_by_key,
};

#[derive(Debug, Clone, PartialEq)]
struct Point {
    timestamp: i64,
    value: f64,
}

#[test]
fn test_decimate_time_series_keeps_peaks() {
    // One point per second for an hour, with three spikes
    let mut points: Vec<Point> = (0..3600)
        .map(|i| Point {
            timestamp: i * 1000,
            value: (i % 10) as f64,
        })
        .collect();
    points[100].value = 250.0;
    points[1800].value = 900.0;
    points[3599].value = 400.0;

    let picked = sample_by_key(&points, 60, |p| p.value).unwrap();

    assert_eq!(picked.len(), 60);
    for peak in [250.0, 900.0, 400.0] {
        assert!(picked.iter().any(|p| p.value == peak), "lost peak {}", peak);
    }

    // Still sorted by time
    assert!(picked.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[test]
fn test_sample_matches_bucket_ranges() {
    let items: Vec<u32> = (0..103).map(|i| (i * 37) % 11).collect();
    let ranges = bucket_ranges(items.len(), 10).unwrap();
    let picked = sample(&items, 10).unwrap();

    assert_eq!(ranges.len(), picked.len());
    for (range, value) in ranges.iter().zip(&picked) {
        let max = items[range.clone()].iter().max().unwrap();
        assert_eq!(max, *value);
    }
}

#[test]
fn test_invalid_limit_is_reported() {
    let err = sample(&[1, 2, 3], 0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("limit"));
}

#[test]
fn test_jobs_from_json_array() {
    let json = r#"[
        {"id": "application_1_0001", "name": "a", "state": "RUNNING", "start_time": 0},
        {"id": "application_1_0002", "name": "b", "state": "FAILED", "start_time": 0},
        {"id": "application_1_0003", "name": "c", "state": "NEW", "start_time": 0}
    ]"#;

    let jobs: Vec<JobRecord> = serde_json::from_str(json).unwrap();
    let styles: Vec<LabelStyle> = jobs.iter().map(|j| j.state.label_style()).collect();

    assert_eq!(
        styles,
        vec![LabelStyle::Primary, LabelStyle::Danger, LabelStyle::Default]
    );
    assert_eq!(jobs[2].state, JobState::Other("NEW".to_string()));
    assert_eq!(jobs.iter().filter(|j| j.state.is_active()).count(), 1);
}

#[test]
fn test_config_drives_sample_limit() {
    let config: AppConfig = parse_config("{ chart: { max_points: 4 } }").unwrap();
    let items: Vec<i32> = (0..20).collect();

    let picked = sample(&items, config.chart.max_points).unwrap();
    assert_eq!(picked, vec![&4, &9, &14, &19]);
}
