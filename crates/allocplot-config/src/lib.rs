//! # allocplot config
//!
//! Configuration schema for a chart run. The defaults are the run: the three
//! result files, their value columns and labels, and the chart styling.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod schema;
pub mod validation;

pub use defaults::*;
pub use schema::*;
pub use validation::*;
