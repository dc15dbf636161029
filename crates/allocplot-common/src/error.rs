//! Error types and utilities for allocplot

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for allocplot operations
pub type Result<T> = std::result::Result<T, AllocPlotError>;

/// Main error type for allocplot operations
#[derive(Error, Debug)]
pub enum AllocPlotError {
    /// A benchmark result file that should have been produced upstream is absent
    #[error("{} not found", path.display())]
    MissingInput {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The header row lacks a column the chart needs
    #[error("Missing column '{column}' in {}", path.display())]
    MissingColumn {
        /// Column name as it should appear in the header
        column: String,
        /// File whose header was read
        path: PathBuf,
    },

    /// A numeric cell could not be parsed
    #[error("Malformed value '{value}' for column '{column}' in {} at line {line}", path.display())]
    MalformedRow {
        /// File containing the row
        path: PathBuf,
        /// 1-based line number, the header being line 1
        line: u64,
        /// Column of the bad cell
        column: String,
        /// Raw cell contents
        value: String,
    },

    /// Structural CSV errors (field count mismatch, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
        /// Underlying cause, usually a [`AllocPlotError::Validation`]
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        /// What is wrong with the value
        message: String,
        /// Dotted path of the offending field, e.g. `chart.style.palette[3]`
        field: Option<String>,
    },

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        /// What went wrong
        message: String,
        /// Underlying backend error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AllocPlotError {
    /// Create a missing input error for the given path
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            path: path.into(),
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error is the missing-input condition that aborts a run
    /// with a user-facing diagnostic.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to AllocPlotError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for AllocPlotError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_missing_input_display() {
        let error = AllocPlotError::missing_input("results.csv");
        assert_eq!(error.to_string(), "results.csv not found");
        assert!(error.is_missing_input());
    }

    #[test]
    fn test_missing_column_display() {
        let error = AllocPlotError::missing_column("time_ms", "results2.csv");
        assert_eq!(
            error.to_string(),
            "Missing column 'time_ms' in results2.csv"
        );
        assert!(!error.is_missing_input());
    }

    #[test]
    fn test_malformed_row_display() {
        let error = AllocPlotError::MalformedRow {
            path: PathBuf::from("results.csv"),
            line: 4,
            column: "num_allocations".to_string(),
            value: "lots".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("'lots'"));
        assert!(display.contains("num_allocations"));
        assert!(display.contains("line 4"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: AllocPlotError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
        assert!(!error.is_missing_input());
    }

    #[test]
    fn test_config_with_source() {
        let error = AllocPlotError::config_with_source(
            "bad palette",
            io::Error::new(io::ErrorKind::InvalidData, "nope"),
        );
        assert_eq!(error.to_string(), "Configuration error: bad palette");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let error: AllocPlotError = serde_error.into();

        assert!(error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_graph_error_display() {
        let error = AllocPlotError::graph_with_source(
            "no font",
            io::Error::new(io::ErrorKind::NotFound, "sans-serif"),
        );
        assert_eq!(format!("{}", error), "Graph error: no font");
        assert!(error.source().is_some());
        assert!(format!("{:?}", error).contains("Graph"));
    }
}
