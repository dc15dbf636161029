//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for allocplot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where chart files go and how they are named.
    pub output: OutputConfig,
    /// Result files to chart, processed in order.
    pub jobs: Vec<ChartJob>,
    /// Canvas layout and styling shared by every chart.
    pub chart: ChartConfig,
}

/// Output file configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory. An empty path means the working directory.
    pub directory: PathBuf,
    /// Prefix placed before the benchmark type in file names.
    pub file_prefix: String,
    /// File extension, without the dot.
    pub file_extension: String,
}

impl OutputConfig {
    /// File name of the chart for one benchmark type, e.g. `benchmark_random_free.png`.
    pub fn file_name(&self, benchmark_type: &str) -> String {
        format!(
            "{}{}.{}",
            self.file_prefix, benchmark_type, self.file_extension
        )
    }

    /// Full path of the chart for one benchmark type.
    pub fn path_for(&self, benchmark_type: &str) -> PathBuf {
        self.directory.join(self.file_name(benchmark_type))
    }
}

/// One result file and the column plotted on its y axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartJob {
    /// CSV file produced by the benchmark.
    pub source: PathBuf,
    /// Column holding the y values.
    pub y_column: String,
    /// Display label of the y axis.
    pub y_label: String,
}

impl ChartJob {
    /// Creates a chart job.
    pub fn new(
        source: impl Into<PathBuf>,
        y_column: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            y_column: y_column.into(),
            y_label: y_label.into(),
        }
    }

    /// Same job reading its source relative to `dir`.
    pub fn rooted_at(&self, dir: &Path) -> Self {
        Self {
            source: dir.join(&self.source),
            ..self.clone()
        }
    }
}

/// Canvas configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Canvas width in figure units.
    pub width: f64,
    /// Canvas height in figure units.
    pub height: f64,
    /// Pixels per figure unit.
    pub pixels_per_unit: u32,
    /// Label of the x axis.
    pub x_label: String,
    /// Heading of the legend.
    pub legend_title: String,
    /// Whether to draw the background grid.
    pub show_grid: bool,
    /// Styling.
    pub style: StyleConfig,
}

impl ChartConfig {
    /// Pixel dimensions of the canvas.
    pub fn pixel_size(&self) -> (u32, u32) {
        let ppu = f64::from(self.pixels_per_unit);
        (
            (self.width * ppu).round() as u32,
            (self.height * ppu).round() as u32,
        )
    }
}

/// Font configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font family.
    pub family: String,
    /// Font size in pixels.
    pub size: u32,
}

/// Margin configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginConfig {
    /// Outer margin around the plot.
    pub outer: u32,
    /// Height of the x label area.
    pub x_label_area: u32,
    /// Width of the y label area.
    pub y_label_area: u32,
}

/// Styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Line colors as `#RRGGBB`, assigned to series in order and cycled.
    pub palette: Vec<String>,
    /// Background color as `#RRGGBB`.
    pub background_color: String,
    /// Grid line color as `#RRGGBB`.
    pub grid_color: String,
    /// Title font.
    pub title_font: FontConfig,
    /// Axis description and legend font.
    pub label_font: FontConfig,
    /// Margins.
    pub margins: MarginConfig,
    /// Marker radius in pixels.
    pub marker_size: u32,
    /// Line stroke width in pixels.
    pub line_width: u32,
}
