//! # allocplot graphs
//!
//! Turns allocator benchmark tables into line charts: one chart per benchmark
//! type, one line per allocator.
//!
//! The pipeline is `Dataset` -> `Partition` -> `Canvas` -> `CanvasWriter`.
//! A [`Canvas`] is a plain value, so everything up to the writer can be tested
//! without a rendering backend.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod generator;
pub mod renderer;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use dataset::{Dataset, Measurement, Partition};
pub use generator::ChartGenerator;
pub use renderer::{CanvasWriter, PngWriter};
pub use types::*;
pub use utils::title_case;
