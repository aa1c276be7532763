//! Loading of the three CSV extracts into typed records
//!
//! Every file must carry a header row naming at least the columns the
//! dashboard reads. Column order is free and other columns are ignored. A
//! missing column or a row that does not deserialize aborts the load with an
//! input schema error naming the file.

use ecomviz_common::{
    CustomerRecord, EcomError, InputSnapshot, OrderRecord, PaymentRecord, Result,
};
use ecomviz_config::InputsConfig;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, error, info, instrument};

/// Columns read from the customers extract.
pub const CUSTOMER_COLUMNS: &[&str] = &["customer_city"];
/// Columns read from the orders extract.
pub const ORDER_COLUMNS: &[&str] = &["order_id", "order_status", "order_purchase_timestamp"];
/// Columns read from the order payments extract.
pub const PAYMENT_COLUMNS: &[&str] = &["payment_type"];

/// Reads the configured extracts.
#[derive(Debug, Clone)]
pub struct DataLoader {
    inputs: InputsConfig,
}

impl DataLoader {
    /// Create a loader for the given input paths
    pub fn new(inputs: InputsConfig) -> Self {
        Self { inputs }
    }

    /// Load all three tables. Fails on the first unreadable or malformed file.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<InputSnapshot> {
        let customers: Vec<CustomerRecord> =
            read_table(&self.inputs.customers, CUSTOMER_COLUMNS).await?;
        let orders: Vec<OrderRecord> = read_table(&self.inputs.orders, ORDER_COLUMNS).await?;
        let payments: Vec<PaymentRecord> =
            read_table(&self.inputs.payments, PAYMENT_COLUMNS).await?;

        info!(
            customers = customers.len(),
            orders = orders.len(),
            payments = payments.len(),
            "Loaded input tables"
        );

        Ok(InputSnapshot {
            customers,
            orders,
            payments,
        })
    }
}

/// Read a CSV file into records after checking its header.
pub async fn read_table<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    let content = tokio::fs::read(path).await.map_err(|e| {
        error!(path = %path.display(), "Failed to read input file: {}", e);
        EcomError::with_source(format!("failed to read '{}'", path.display()), e)
    })?;

    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    parse_table(&content, &name, required)
}

/// Parse CSV content into records after checking that `required` columns exist.
///
/// `source` names the input in error messages.
pub fn parse_table<T: DeserializeOwned>(
    content: &[u8],
    source: &str,
    required: &[&str],
) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(content);

    let headers = reader.headers().map_err(|e| EcomError::from(e).in_file(source))?;
    debug!("CSV headers of {}: {:?}", source, headers);

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();
    if !missing.is_empty() {
        return Err(EcomError::input_schema_at(
            format!("missing required column(s): {}", missing.join(", ")),
            source,
            Some(1),
        ));
    }

    let rows = reader
        .deserialize::<T>()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|e| EcomError::from(e).in_file(source))?;

    debug!("Parsed {} rows from {}", rows.len(), source);
    Ok(rows)
}
