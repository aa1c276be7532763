//! # EcomViz Dashboard
//!
//! Descriptive dashboard over the public e-commerce dataset.
//!
//! Reads the customers, orders and payments extracts, renders the top cities,
//! top payment types and monthly delivered orders charts, and publishes them
//! as one HTML page.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod dashboard;
pub mod error;
pub mod page;

pub use cli::*;
pub use dashboard::*;
pub use error::*;
pub use page::*;
