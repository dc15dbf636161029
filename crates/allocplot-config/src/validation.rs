//! Validation of a [`Config`] before any chart is produced.

use crate::schema::{ChartJob, Config, StyleConfig};
use allocplot_common::{AllocPlotError, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Check a `#RRGGBB` color.
pub fn validate_hex_color(color: &str, field: &str) -> Result<()> {
    if HEX_COLOR_REGEX.is_match(color) {
        Ok(())
    } else {
        Err(AllocPlotError::validation_field(
            format!("'{color}' is not a #RRGGBB color"),
            field,
        ))
    }
}

fn validate_job(index: usize, job: &ChartJob) -> Result<()> {
    if job.source.as_os_str().is_empty() {
        return Err(AllocPlotError::validation_field(
            "source path cannot be empty",
            format!("jobs[{index}].source"),
        ));
    }
    if job.y_column.trim().is_empty() {
        return Err(AllocPlotError::validation_field(
            "y column cannot be empty",
            format!("jobs[{index}].y_column"),
        ));
    }
    Ok(())
}

fn validate_style(style: &StyleConfig) -> Result<()> {
    if style.palette.is_empty() {
        return Err(AllocPlotError::validation_field(
            "palette needs at least one color",
            "chart.style.palette",
        ));
    }
    for (i, color) in style.palette.iter().enumerate() {
        validate_hex_color(color, &format!("chart.style.palette[{i}]"))?;
    }
    validate_hex_color(&style.background_color, "chart.style.background_color")?;
    validate_hex_color(&style.grid_color, "chart.style.grid_color")?;
    Ok(())
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.jobs.is_empty() {
            return Err(AllocPlotError::validation_field(
                "at least one chart job is required",
                "jobs",
            ));
        }
        for (i, job) in self.jobs.iter().enumerate() {
            validate_job(i, job)?;
        }

        let chart = &self.chart;
        if !(chart.width > 0.0 && chart.height > 0.0) {
            return Err(AllocPlotError::validation_field(
                format!(
                    "canvas size must be positive, got {}x{}",
                    chart.width, chart.height
                ),
                "chart.width",
            ));
        }
        if chart.pixels_per_unit == 0 {
            return Err(AllocPlotError::validation_field(
                "pixels per unit must be positive",
                "chart.pixels_per_unit",
            ));
        }
        validate_style(&chart.style)?;

        if self.output.file_extension.is_empty() {
            return Err(AllocPlotError::validation_field(
                "file extension cannot be empty",
                "output.file_extension",
            ));
        }

        debug!(jobs = self.jobs.len(), "configuration validated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_regex() {
        assert!(HEX_COLOR_REGEX.is_match("#FFFFFF"));
        assert!(HEX_COLOR_REGEX.is_match("#1f77b4"));

        assert!(!HEX_COLOR_REGEX.is_match("FFFFFF")); // Missing #
        assert!(!HEX_COLOR_REGEX.is_match("#FFF")); // Too short
        assert!(!HEX_COLOR_REGEX.is_match("#FFFFFFF")); // Too long
        assert!(!HEX_COLOR_REGEX.is_match("#GGGGGG"));
        assert!(!HEX_COLOR_REGEX.is_match(""));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_jobs_rejected() {
        let mut config = Config::default();
        config.jobs.clear();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            AllocPlotError::Validation { field: Some(ref f), .. } if f == "jobs"
        ));
    }

    #[test]
    fn test_empty_y_column_rejected() {
        let mut config = Config::default();
        config.jobs[1].y_column = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            AllocPlotError::Validation { field: Some(ref f), .. } if f == "jobs[1].y_column"
        ));
    }

    #[test]
    fn test_bad_palette_color_rejected() {
        let mut config = Config::default();
        config.chart.style.palette[3] = "red".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'red'"));
    }

    #[test]
    fn test_non_positive_canvas_rejected() {
        let mut config = Config::default();
        config.chart.height = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.chart.width = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.chart.pixels_per_unit = 0;
        assert!(config.validate().is_err());
    }
}
