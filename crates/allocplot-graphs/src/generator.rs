//! Chart generation: one line chart per benchmark type of a result table.

use crate::{
    dataset::{Dataset, Partition},
    renderer::CanvasWriter,
    types::Canvas,
    utils::title_case,
};
use allocplot_common::Result;
use allocplot_config::{ChartConfig, OutputConfig};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Builds canvases from result tables and hands them to a [`CanvasWriter`].
pub struct ChartGenerator<W> {
    writer: W,
    chart: ChartConfig,
    output: OutputConfig,
}

impl<W: CanvasWriter> ChartGenerator<W> {
    /// Creates a new chart generator.
    pub fn new(writer: W, chart: ChartConfig, output: OutputConfig) -> Self {
        Self {
            writer,
            chart,
            output,
        }
    }

    /// Gives back the writer, e.g. to inspect what a test writer captured.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Charts every benchmark type in `source_path`.
    ///
    /// Writes `benchmark_<type>.png` per distinct benchmark type, in the order
    /// the types first appear, and returns the written paths. A table with no
    /// rows produces no charts. A missing file fails with
    /// [`allocplot_common::AllocPlotError::MissingInput`] before anything is
    /// written.
    pub fn generate_charts(
        &mut self,
        source_path: &Path,
        y_column: &str,
        y_label: &str,
    ) -> Result<Vec<PathBuf>> {
        let dataset = Dataset::load(source_path, y_column)?;
        self.generate_from_dataset(&dataset, y_label)
    }

    /// Same as [`generate_charts`](Self::generate_charts) for an already
    /// loaded table.
    pub fn generate_from_dataset(
        &mut self,
        dataset: &Dataset,
        y_label: &str,
    ) -> Result<Vec<PathBuf>> {
        if dataset.is_empty() {
            debug!(source = %dataset.source().display(), "no rows, nothing to chart");
            return Ok(Vec::new());
        }
        if !self.output.directory.as_os_str().is_empty() {
            fs::create_dir_all(&self.output.directory)?;
        }

        let mut written = Vec::new();
        for partition in dataset.partitions() {
            println!("Generating plot for: {}...", partition.benchmark_type());

            let canvas = self.build_canvas(&partition, y_label);
            if canvas.point_count() == 0 {
                warn!(
                    benchmark_type = partition.benchmark_type(),
                    "no plottable points, chart will be empty"
                );
            }

            let path = self.output.path_for(&canvas.benchmark_type);
            self.writer.write(&canvas, &path)?;
            println!("Saved plot to {}", path.display());
            written.push(path);
        }
        Ok(written)
    }

    /// The canvas for one partition. Pure: no I/O, no shared state.
    pub fn build_canvas(&self, partition: &Partition<'_>, y_label: &str) -> Canvas {
        let benchmark_type = partition.benchmark_type();
        let (width, height) = self.chart.pixel_size();
        let series = partition.series();
        debug!(
            benchmark_type,
            rows = partition.len(),
            series = series.len(),
            "built canvas"
        );

        Canvas {
            benchmark_type: benchmark_type.to_string(),
            file_name: self.output.file_name(benchmark_type),
            title: title_case(benchmark_type),
            x_label: self.chart.x_label.clone(),
            y_label: y_label.to_string(),
            legend_title: self.chart.legend_title.clone(),
            show_grid: self.chart.show_grid,
            width,
            height,
            series,
        }
    }
}
