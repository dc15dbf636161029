//! # allocplot
//!
//! Runs the chart jobs of a [`Config`]: every result table is charted in job
//! order, one PNG per benchmark type.

#![warn(missing_docs)]
#![warn(clippy::all)]

use allocplot_common::{AllocPlotError, Result};
use allocplot_config::Config;
use allocplot_graphs::{CanvasWriter, ChartGenerator};
use std::path::PathBuf;
use tracing::{debug, info};

/// Checks `config` before any job runs.
///
/// Validation failures come back as [`AllocPlotError::Config`] with the
/// offending field as the source.
pub fn check_config(config: &Config) -> Result<()> {
    config
        .validate()
        .map_err(|e| AllocPlotError::config_with_source("invalid chart configuration", e))
}

/// Charts every job of `config` with `writer`, in order.
///
/// Stops at the first failing job; files written by earlier jobs stay on disk.
/// Returns every written path, including repeats when a later table reuses a
/// benchmark type.
pub fn run<W: CanvasWriter>(config: &Config, writer: W) -> Result<Vec<PathBuf>> {
    let mut generator = ChartGenerator::new(writer, config.chart.clone(), config.output.clone());
    let mut written = Vec::new();

    for job in &config.jobs {
        debug!(source = %job.source.display(), y_column = %job.y_column, "starting chart job");
        let paths = generator.generate_charts(&job.source, &job.y_column, &job.y_label)?;
        info!(source = %job.source.display(), charts = paths.len(), "chart job finished");
        written.extend(paths);
    }

    Ok(written)
}

/// Console line printed when a result table does not exist.
pub fn missing_input_message(path: &std::path::Path) -> String {
    format!(
        "Error: {} not found. Run the allocator benchmark first.",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use allocplot_common::test_utils::{create_temp_dir, csv_fixtures, write_csv};
    use allocplot_config::ChartJob;
    use allocplot_graphs::test_utils::RecordingWriter;
    use std::path::Path;

    #[test]
    fn test_missing_input_message() {
        assert_eq!(
            missing_input_message(Path::new("results2.csv")),
            "Error: results2.csv not found. Run the allocator benchmark first."
        );
    }

    #[test]
    fn test_default_config_passes_check() {
        assert!(check_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_config_is_a_config_error() {
        let mut config = Config::default();
        config.chart.style.palette.clear();

        let err = check_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid chart configuration"
        );
        match &err {
            AllocPlotError::Config {
                source: Some(source),
                ..
            } => {
                let cause = source.downcast_ref::<AllocPlotError>().unwrap();
                assert!(matches!(
                    cause,
                    AllocPlotError::Validation { field: Some(f), .. } if f == "chart.style.palette"
                ));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_jobs_run_in_order() {
        let dir = create_temp_dir();
        write_csv(&dir, "results.csv", csv_fixtures::timing_csv());
        write_csv(&dir, "results2.csv", csv_fixtures::second_timing_csv());
        write_csv(&dir, "results3.csv", csv_fixtures::throughput_csv());

        let mut config = Config::default();
        config.jobs = config.jobs.iter().map(|j| j.rooted_at(dir.path())).collect();

        let mut writer = RecordingWriter::default();
        let written = run(&config, &mut writer).unwrap();

        let names: Vec<String> = writer
            .canvases()
            .iter()
            .map(|c| c.benchmark_type.clone())
            .collect();
        assert_eq!(
            names,
            vec![
                "single_size",
                "random_free",
                "random_free",
                "multi_thread",
                "multi_thread"
            ]
        );
        assert_eq!(written.len(), 5);
        assert_eq!(writer.canvases()[4].y_label, "throughput_M_ops_per_sec");
    }

    #[test]
    fn test_first_failure_stops_the_run() {
        let dir = create_temp_dir();
        write_csv(&dir, "results.csv", csv_fixtures::timing_csv());
        write_csv(&dir, "results3.csv", csv_fixtures::throughput_csv());

        let mut config = Config::default();
        config.jobs = config.jobs.iter().map(|j| j.rooted_at(dir.path())).collect();

        let mut writer = RecordingWriter::default();
        let err = run(&config, &mut writer).unwrap_err();

        assert!(err.is_missing_input());
        assert!(err.to_string().contains("results2.csv"));
        // Charts of the first job were written, the third job never ran
        assert_eq!(writer.canvases().len(), 2);
    }

    #[test]
    fn test_empty_job_list_writes_nothing() {
        let config = Config {
            jobs: Vec::<ChartJob>::new(),
            ..Config::default()
        };
        let mut writer = RecordingWriter::default();
        assert!(run(&config, &mut writer).unwrap().is_empty());
    }
}
