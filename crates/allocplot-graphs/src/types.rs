//! Chart data structures

use serde::{Deserialize, Serialize};

/// Data point of a line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Number of allocations
    pub x: f64,
    /// Measured value
    pub y: f64,
}

/// One allocator's line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Allocator name, shown in the legend
    pub name: String,
    /// Points in ascending x order
    pub points: Vec<DataPoint>,
}

/// Everything needed to draw one chart file.
///
/// Each benchmark type gets its own canvas; nothing carries over between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Benchmark type the chart belongs to
    pub benchmark_type: String,
    /// Output file name, e.g. `benchmark_random_free.png`
    pub file_name: String,
    /// Caption above the plot
    pub title: String,
    /// x axis description
    pub x_label: String,
    /// y axis description
    pub y_label: String,
    /// Legend heading
    pub legend_title: String,
    /// Draw the background grid
    pub show_grid: bool,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Lines, in legend order
    pub series: Vec<Series>,
}

impl Canvas {
    /// Number of points across all series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Looks up a series by allocator name
    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Bounds `(x_min, x_max, y_min, y_max)` of all points, `None` when empty
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self.series.iter().flat_map(|s| s.points.iter());
        let first = points.next()?;
        Some(points.fold(
            (first.x, first.x, first.y, first.y),
            |(x_min, x_max, y_min, y_max), p| {
                (x_min.min(p.x), x_max.max(p.x), y_min.min(p.y), y_max.max(p.y))
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_with(series: Vec<Series>) -> Canvas {
        Canvas {
            benchmark_type: "single_size".to_string(),
            file_name: "benchmark_single_size.png".to_string(),
            title: "Single Size".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            legend_title: "Allocator".to_string(),
            show_grid: true,
            width: 1000,
            height: 600,
            series,
        }
    }

    #[test]
    fn test_bounds_empty() {
        assert_eq!(canvas_with(vec![]).bounds(), None);
        let empty_line = Series {
            name: "system".to_string(),
            points: vec![],
        };
        assert_eq!(canvas_with(vec![empty_line]).bounds(), None);
    }

    #[test]
    fn test_bounds_and_lookup() {
        let canvas = canvas_with(vec![
            Series {
                name: "system".to_string(),
                points: vec![DataPoint { x: 1.0, y: 5.0 }, DataPoint { x: 4.0, y: 2.0 }],
            },
            Series {
                name: "custom".to_string(),
                points: vec![DataPoint { x: 2.0, y: 9.0 }],
            },
        ]);

        assert_eq!(canvas.bounds(), Some((1.0, 4.0, 2.0, 9.0)));
        assert_eq!(canvas.point_count(), 3);
        assert_eq!(canvas.series_named("custom").unwrap().points.len(), 1);
        assert!(canvas.series_named("jemalloc").is_none());
    }
}
