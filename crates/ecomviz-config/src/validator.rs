//! Configuration validation.

use crate::schema::{ChartSize, Config};
use ecomviz_common::{parse_hex_color, EcomError, Result};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        config.validate()
    }
}

impl Config {
    /// Validates the configuration, reporting the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, path) in [
            ("inputs.customers", &self.inputs.customers),
            ("inputs.orders", &self.inputs.orders),
            ("inputs.payments", &self.inputs.payments),
            ("output.path", &self.output.path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(EcomError::validation_field("path cannot be empty", field));
            }
        }

        if self.charts.top_n == 0 {
            return Err(EcomError::validation_field(
                "top_n must be at least 1",
                "charts.top_n",
            ));
        }

        for (field, color) in [
            ("charts.highlight_color", &self.charts.highlight_color),
            ("charts.neutral_color", &self.charts.neutral_color),
            ("charts.background_color", &self.charts.background_color),
        ] {
            if parse_hex_color(color).is_none() {
                return Err(EcomError::validation_field(
                    format!("'{color}' is not a #RRGGBB colour"),
                    field,
                ));
            }
        }

        for (field, size) in [
            ("charts.cities", self.charts.cities),
            ("charts.payment_types", self.charts.payment_types),
            ("charts.monthly_deliveries", self.charts.monthly_deliveries),
        ] {
            validate_size(field, size)?;
        }

        Ok(())
    }
}

fn validate_size(field: &str, size: ChartSize) -> Result<()> {
    if size.width < 100 || size.height < 100 {
        return Err(EcomError::validation_field(
            format!("chart canvas {}x{} is too small", size.width, size.height),
            field,
        ));
    }
    Ok(())
}
