//! Default values. Running with these reproduces the stock dashboard.

use crate::schema::*;
use ecomviz_common::LoggingConfig;

/// Default customers extract file name.
pub const DEFAULT_CUSTOMERS_PATH: &str = "customers_corrected.csv";
/// Default orders extract file name.
pub const DEFAULT_ORDERS_PATH: &str = "orders_corrected.csv";
/// Default order payments extract file name.
pub const DEFAULT_PAYMENTS_PATH: &str = "order_payments_corrected.csv";
/// Default output page.
pub const DEFAULT_OUTPUT_PATH: &str = "dashboard.html";
/// Default page header.
pub const DEFAULT_PAGE_TITLE: &str = "E-Commerce Public Analysis";

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: InputsConfig::default(),
            output: OutputConfig::default(),
            charts: ChartsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            customers: DEFAULT_CUSTOMERS_PATH.into(),
            orders: DEFAULT_ORDERS_PATH.into(),
            payments: DEFAULT_PAYMENTS_PATH.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.into(),
            title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            highlight_color: "#3A6D8C".to_string(),
            neutral_color: "#D3D3D3".to_string(),
            background_color: "#FFFFFF".to_string(),
            cities: ChartSize::new(640, 480),
            payment_types: ChartSize::new(1200, 600),
            monthly_deliveries: ChartSize::new(1200, 600),
        }
    }
}
