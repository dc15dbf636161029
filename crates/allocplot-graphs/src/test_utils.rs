//! Test writers for exercising the chart pipeline without a rendering backend.

use crate::{renderer::CanvasWriter, types::Canvas};
use allocplot_common::Result;
use std::{fs, path::Path};

/// Keeps every canvas it is handed, in order, instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    written: Vec<Canvas>,
}

impl RecordingWriter {
    /// Canvases in write order.
    pub fn canvases(&self) -> Vec<&Canvas> {
        self.written.iter().collect()
    }
}

impl CanvasWriter for RecordingWriter {
    fn write(&mut self, canvas: &Canvas, _path: &Path) -> Result<()> {
        self.written.push(canvas.clone());
        Ok(())
    }
}

/// Writes each canvas to its path as JSON, so tests can check files on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonWriter;

impl JsonWriter {
    /// Reads back a canvas written by this writer.
    pub fn read(path: &Path) -> Result<Canvas> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl CanvasWriter for JsonWriter {
    fn write(&mut self, canvas: &Canvas, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(canvas)?)?;
        Ok(())
    }
}
