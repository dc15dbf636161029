//! Integration tests for allocplot-config crate.

use allocplot_common::test_utils::create_temp_dir;
use allocplot_config::{ChartJob, Config};
use std::path::PathBuf;

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.chart.style.background_color = "#fff".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_json_roundtrip_keeps_job_order() {
    let config = Config::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, config);
    assert_eq!(parsed.jobs[2].source, PathBuf::from("results3.csv"));
}

#[test]
fn test_jobs_rooted_in_directory() {
    let dir = create_temp_dir();
    let job = ChartJob::new("results.csv", "time_ms", "Total Time (ms)");
    let rooted = job.rooted_at(dir.path());

    assert_eq!(rooted.source, dir.path().join("results.csv"));
    assert_eq!(rooted.y_column, job.y_column);
    assert_eq!(rooted.y_label, job.y_label);
}

#[test]
fn test_output_directory_applies_to_paths() {
    let dir = create_temp_dir();
    let mut config = Config::default();
    config.output.directory = dir.path().to_path_buf();

    assert_eq!(
        config.output.path_for("multi_thread"),
        dir.path().join("benchmark_multi_thread.png")
    );
}
