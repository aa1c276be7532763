//! Summary tables produced by the aggregators and the chart configuration
//! consumed by the renderers.

use ecomviz_config::{ChartSize, ChartsConfig};
use serde::{Deserialize, Serialize};

/// Number of customers living in one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCount {
    /// City name as it appears in the customers table.
    pub city: String,
    /// Customer rows naming this city.
    pub count: u64,
}

/// Number of payment records using one payment type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTypeCount {
    /// Payment type, e.g. `credit_card`.
    pub payment_type: String,
    /// Payment rows using this type.
    pub count: u64,
}

/// Distinct delivered orders purchased in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthlyDeliveryCount {
    /// Calendar year of the purchase.
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// Distinct delivered order ids purchased that month.
    pub delivered_count: u64,
}

/// One bar of a ranked bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopItem {
    /// Axis label of the bar.
    pub name: String,
    /// Bar length.
    pub count: u64,
}

impl From<&CityCount> for TopItem {
    fn from(row: &CityCount) -> Self {
        Self {
            name: row.city.clone(),
            count: row.count,
        }
    }
}

impl From<&PaymentTypeCount> for TopItem {
    fn from(row: &PaymentTypeCount) -> Self {
        Self {
            name: row.payment_type.clone(),
            count: row.count,
        }
    }
}

/// Colours used by every chart, as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Colour of the first (largest) bar.
    pub highlight_color: String,
    /// Colour of the remaining bars.
    pub neutral_color: String,
    /// Canvas fill.
    pub background_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            highlight_color: "#3A6D8C".to_string(),
            neutral_color: "#D3D3D3".to_string(),
            background_color: "#FFFFFF".to_string(),
        }
    }
}

/// Graph configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Caption drawn above the plot; `None` draws no caption.
    pub title: Option<String>,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Horizontal axis description.
    pub x_label: String,
    /// Vertical axis description.
    pub y_label: String,
    /// Chart colours.
    pub style: StyleConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: 800,
            height: 600,
            x_label: String::new(),
            y_label: String::new(),
            style: StyleConfig::default(),
        }
    }
}

impl GraphConfig {
    /// Configuration of the top cities chart.
    pub fn cities(charts: &ChartsConfig) -> Self {
        Self::bar(
            charts,
            format!("Top {} Cities with Most Customers", charts.top_n),
            "Number of Customers",
            "Name of City",
            charts.cities,
        )
    }

    /// Configuration of the top payment types chart.
    pub fn payment_types(charts: &ChartsConfig) -> Self {
        Self::bar(
            charts,
            format!("Top {} Payment Types Most Used", charts.top_n),
            "Number of Payments",
            "Payment Type",
            charts.payment_types,
        )
    }

    /// Configuration of the monthly deliveries chart. It has no caption.
    pub fn monthly_deliveries(charts: &ChartsConfig) -> Self {
        Self {
            title: None,
            width: charts.monthly_deliveries.width,
            height: charts.monthly_deliveries.height,
            x_label: "Month".to_string(),
            y_label: "Number of Delivered Orders".to_string(),
            style: StyleConfig::from(charts),
        }
    }

    fn bar(charts: &ChartsConfig, title: String, x_label: &str, y_label: &str, size: ChartSize) -> Self {
        Self {
            title: Some(title),
            width: size.width,
            height: size.height,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            style: StyleConfig::from(charts),
        }
    }
}

impl From<&ChartsConfig> for StyleConfig {
    fn from(charts: &ChartsConfig) -> Self {
        Self {
            highlight_color: charts.highlight_color.clone(),
            neutral_color: charts.neutral_color.clone(),
            background_color: charts.background_color.clone(),
        }
    }
}
