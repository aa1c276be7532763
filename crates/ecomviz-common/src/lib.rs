//! # EcomViz Common
//!
//! Shared records, error types, logging and utilities for the EcomViz dashboard.
//!
//! This crate provides the foundational types used across all other crates in
//! the workspace: the input records read from the e-commerce extracts, the
//! error taxonomy, and the tracing setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{EcomError, Result};
pub use logging::{bootstrap_subscriber, init_logging, LoggingConfig};
pub use types::*;
pub use utils::*;
