//! Graph utility functions and helpers.

use ecomviz_common::{parse_hex_color, EcomError, Result};
use plotters::style::RGBColor;

/// Qualitative palette for per-year series, in the order years are drawn.
pub const SERIES_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Longest category name shown on a bar chart axis.
pub const MAX_LABEL_CHARS: usize = 20;

/// Utility functions for graph generation.
pub struct GraphUtils;

impl GraphUtils {
    /// Parses a `#RRGGBB` colour for plotting.
    pub fn color(hex: &str) -> Result<RGBColor> {
        parse_hex_color(hex)
            .map(|(r, g, b)| RGBColor(r, g, b))
            .ok_or_else(|| EcomError::graph(format!("invalid colour '{hex}'")))
    }

    /// Colour of the `index`-th series; wraps around after ten.
    pub fn series_color(index: usize) -> RGBColor {
        SERIES_PALETTE[index % SERIES_PALETTE.len()]
    }

    /// Upper bound of a count axis: 10% headroom above the largest value, at least 1.
    pub fn axis_upper_bound(max: u64) -> u64 {
        (max + max.div_ceil(10)).max(1)
    }
}
