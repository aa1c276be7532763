//! Configuration schema definitions using serde.

use ecomviz_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input extract locations.
    pub inputs: InputsConfig,
    /// Output page configuration.
    pub output: OutputConfig,
    /// Chart configuration.
    pub charts: ChartsConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Paths of the three CSV extracts, resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    /// Customers extract.
    pub customers: PathBuf,
    /// Orders extract.
    pub orders: PathBuf,
    /// Order payments extract.
    pub payments: PathBuf,
}

/// Output page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the rendered HTML page is written.
    pub path: PathBuf,
    /// Page header.
    pub title: String,
}

/// Chart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Number of bars in the top-N charts.
    pub top_n: usize,
    /// Colour of the first (largest) bar.
    pub highlight_color: String,
    /// Colour shared by the remaining bars.
    pub neutral_color: String,
    /// Chart background colour.
    pub background_color: String,
    /// Canvas of the cities chart.
    pub cities: ChartSize,
    /// Canvas of the payment types chart.
    pub payment_types: ChartSize,
    /// Canvas of the monthly deliveries chart.
    pub monthly_deliveries: ChartSize,
}

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ChartSize {
    /// Creates a new chart size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
