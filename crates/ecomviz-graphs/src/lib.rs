//! # EcomViz Graphs
//!
//! Loading, aggregation and chart rendering for the e-commerce dashboard.
//!
//! The [`DataLoader`] reads the three CSV extracts, the aggregators turn them
//! into summary tables, and the renderers draw those tables as SVG charts
//! with plotters. [`GraphManager`] composes the last two steps.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod data_loader;
pub mod manager;
pub mod monthly_deliveries;
pub mod top_items;
pub mod traits;
pub mod types;
pub mod utils;

pub use aggregator::*;
pub use data_loader::*;
pub use manager::*;
pub use monthly_deliveries::*;
pub use top_items::*;
pub use traits::*;
pub use types::*;
pub use utils::*;
