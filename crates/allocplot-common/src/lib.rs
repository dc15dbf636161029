//! # allocplot common
//!
//! Shared error types, logging setup and test helpers used by every crate in
//! the allocplot workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{AllocPlotError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
