//! Application-wide error types using thiserror.

use ecomviz_common::EcomError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    /// Loading, aggregation, rendering or configuration failed.
    #[error(transparent)]
    Ecom(#[from] EcomError),

    /// A chart could not be placed on the display surface.
    #[error("Display error: {0}")]
    Display(String),

    /// I/O error while writing the page.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    /// Whether the run failed because of malformed input data.
    pub fn is_input_schema(&self) -> bool {
        matches!(self, Self::Ecom(err) if err.is_input_schema())
    }
}

/// Result type for the dashboard application.
pub type DashboardResult<T> = Result<T, DashboardError>;
