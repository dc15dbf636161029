//! Default values: the fixed inputs, labels and look of a chart run.

use crate::schema::*;
use std::path::PathBuf;

/// Label of the x axis on every chart.
pub const X_LABEL: &str = "Number of Allocations";

/// Heading of the legend on every chart.
pub const LEGEND_TITLE: &str = "Allocator";

/// y label used by the timing tables.
pub const TIME_LABEL: &str = "Total Time (ms)";

/// Categorical palette, one color per allocator line.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// The result files, in the order they are charted.
pub fn default_jobs() -> Vec<ChartJob> {
    vec![
        ChartJob::new("results.csv", "time_ms", TIME_LABEL),
        ChartJob::new("results2.csv", "time_ms", TIME_LABEL),
        ChartJob::new(
            "results3.csv",
            "throughput_M_ops_per_sec",
            "throughput_M_ops_per_sec",
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            jobs: default_jobs(),
            chart: ChartConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            file_prefix: "benchmark_".to_string(),
            file_extension: "png".to_string(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 6.0,
            pixels_per_unit: 100,
            x_label: X_LABEL.to_string(),
            legend_title: LEGEND_TITLE.to_string(),
            show_grid: true,
            style: StyleConfig::default(),
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 16,
        }
    }
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            outer: 20,
            x_label_area: 50,
            y_label_area: 70,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
            background_color: "#ffffff".to_string(),
            grid_color: "#dddddd".to_string(),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 24,
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
            marker_size: 4,
            line_width: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_jobs_order() {
        let jobs = default_jobs();
        let sources: Vec<_> = jobs.iter().map(|j| j.source.clone()).collect();
        assert_eq!(
            sources,
            vec![
                PathBuf::from("results.csv"),
                PathBuf::from("results2.csv"),
                PathBuf::from("results3.csv"),
            ]
        );
        assert_eq!(jobs[0].y_column, "time_ms");
        assert_eq!(jobs[1].y_column, "time_ms");
        assert_eq!(jobs[2].y_column, "throughput_M_ops_per_sec");
        assert_eq!(jobs[0].y_label, "Total Time (ms)");
    }

    #[test]
    fn test_default_canvas_is_ten_by_six() {
        let chart = ChartConfig::default();
        assert_eq!(chart.pixel_size(), (1000, 600));
        assert!(chart.show_grid);
        assert_eq!(chart.x_label, "Number of Allocations");
        assert_eq!(chart.legend_title, "Allocator");
    }

    #[test]
    fn test_default_output_names() {
        let output = OutputConfig::default();
        assert_eq!(output.file_name("random_free"), "benchmark_random_free.png");
        assert_eq!(
            output.path_for("random_free"),
            PathBuf::from("benchmark_random_free.png")
        );
    }
}
