//! Canvas writers: where a finished [`Canvas`] goes.

use crate::types::Canvas;
use allocplot_common::Result;
use allocplot_config::StyleConfig;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Sink for finished canvases.
///
/// The generator hands every canvas to a writer together with its output
/// path. Production code renders PNG files; tests record the canvases.
pub trait CanvasWriter {
    /// Persist `canvas` at `path`, replacing whatever is there.
    fn write(&mut self, canvas: &Canvas, path: &Path) -> Result<()>;
}

impl<W: CanvasWriter + ?Sized> CanvasWriter for &mut W {
    fn write(&mut self, canvas: &Canvas, path: &Path) -> Result<()> {
        (**self).write(canvas, path)
    }
}

/// Parse a color string (hex format) to RGBColor
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    // Default to black if parsing fails
    RGBColor(0, 0, 0)
}

/// Widen `[min, max]` by 5% on each side; a zero-width range gets a fixed pad
/// so the axis never collapses.
fn padded(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else if min != 0.0 {
        min.abs() * 0.05
    } else {
        1.0
    };
    (min - pad, max + pad)
}

/// Axis ranges for a canvas, `(x_min, x_max, y_min, y_max)`.
pub fn data_ranges(canvas: &Canvas) -> (f64, f64, f64, f64) {
    match canvas.bounds() {
        None => (0.0, 1.0, 0.0, 1.0),
        Some((x_min, x_max, y_min, y_max)) => {
            let (x_min, x_max) = padded(x_min, x_max);
            let (y_min, y_max) = padded(y_min, y_max);
            (x_min, x_max, y_min, y_max)
        }
    }
}

/// Renders canvases as PNG files with plotters' bitmap backend.
#[derive(Debug, Clone)]
pub struct PngWriter {
    style: StyleConfig,
}

impl PngWriter {
    /// Creates a writer drawing with `style`.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Line colors, in series order. An empty palette draws every line black.
    pub fn colors(&self) -> Vec<RGBColor> {
        if self.style.palette.is_empty() {
            return vec![BLACK];
        }
        self.style.palette.iter().map(|c| parse_color(c)).collect()
    }
}

impl Default for PngWriter {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

impl CanvasWriter for PngWriter {
    fn write(&mut self, canvas: &Canvas, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (canvas.width, canvas.height)).into_drawing_area();
        root.fill(&parse_color(&self.style.background_color))?;

        let (x_min, x_max, y_min, y_max) = data_ranges(canvas);
        let title_font = (
            self.style.title_font.family.as_str(),
            self.style.title_font.size,
        );
        let label_font = (
            self.style.label_font.family.as_str(),
            self.style.label_font.size,
        );
        let margins = &self.style.margins;

        let mut chart = ChartBuilder::on(&root)
            .caption(&canvas.title, title_font)
            .margin(margins.outer)
            .x_label_area_size(margins.x_label_area)
            .y_label_area_size(margins.y_label_area)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(canvas.x_label.as_str())
            .y_desc(canvas.y_label.as_str())
            .axis_desc_style(label_font);
        if canvas.show_grid {
            mesh.light_line_style(parse_color(&self.style.grid_color));
        } else {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        // Header row of the legend: a label with no line glyph
        chart
            .draw_series(std::iter::empty::<Circle<(f64, f64), u32>>())?
            .label(canvas.legend_title.as_str())
            .legend(|(x, y)| EmptyElement::at((x, y)));

        let colors = self.colors();
        let line_width = self.style.line_width;
        let marker_size = self.style.marker_size;
        for (i, series) in canvas.series.iter().enumerate() {
            // Palette cycles once there are more lines than colors
            let color = colors[i % colors.len()];
            let points: Vec<(f64, f64)> = series.points.iter().map(|p| (p.x, p.y)).collect();

            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    color.stroke_width(line_width),
                ))?
                .label(series.name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
                });
            chart.draw_series(
                points
                    .iter()
                    .map(|point| Circle::new(*point, marker_size, color.filled())),
            )?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(label_font)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;

        info!(
            path = %path.display(),
            series = canvas.series.len(),
            points = canvas.point_count(),
            "rendered chart"
        );
        Ok(())
    }
}
