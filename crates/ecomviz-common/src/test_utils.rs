//! Test utilities and shared test helpers for EcomViz.
//!
//! Record builders, CSV fixture writers and a one-shot test logger that can be
//! used across all crates in the workspace for unit and integration testing.

use crate::{CustomerRecord, OrderRecord, PaymentRecord};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Builds a customer living in `city`.
pub fn customer(id: &str, city: &str) -> CustomerRecord {
    CustomerRecord {
        customer_id: Some(id.to_string()),
        customer_city: Some(city.to_string()),
    }
}

/// Builds customers from a list of cities, ids `c0`, `c1`, ...
pub fn customers_in(cities: &[&str]) -> Vec<CustomerRecord> {
    cities
        .iter()
        .enumerate()
        .map(|(i, city)| customer(&format!("c{i}"), city))
        .collect()
}

/// Builds an order row.
pub fn order(id: &str, status: &str, timestamp: &str) -> OrderRecord {
    OrderRecord {
        order_id: Some(id.to_string()),
        order_status: Some(status.to_string()),
        order_purchase_timestamp: Some(timestamp.to_string()),
    }
}

/// Builds a payment row.
pub fn payment(order_id: &str, payment_type: &str) -> PaymentRecord {
    PaymentRecord {
        order_id: Some(order_id.to_string()),
        payment_type: Some(payment_type.to_string()),
    }
}

/// Generate sample fixtures shaped like the real extracts.
pub mod fixtures {
    /// Customers extract with the full column set of the public dataset.
    pub const CUSTOMERS_CSV: &str = "\
customer_id,customer_unique_id,customer_zip_code_prefix,customer_city,customer_state
c01,u01,01001,sao paulo,SP
c02,u02,20010,rio de janeiro,RJ
c03,u03,01002,sao paulo,SP
c04,u04,30110,belo horizonte,MG
c05,u05,20011,rio de janeiro,RJ
c06,u06,01003,sao paulo,SP
c07,u07,70040,brasilia,DF
c08,u08,80010,curitiba,PR
c09,u09,13010,campinas,SP
c10,u10,01004,sao paulo,SP
";

    /// Orders extract: two delivered orders in 2017-01 (one duplicated), one
    /// shipped, one delivered in 2018-03.
    pub const ORDERS_CSV: &str = "\
order_id,customer_id,order_status,order_purchase_timestamp,order_approved_at
o1,c01,delivered,2017-01-05 10:00:00,2017-01-05 11:00:00
o1,c01,delivered,2017-01-20 09:30:00,2017-01-20 10:00:00
o2,c02,shipped,2017-01-10 08:00:00,2017-01-10 09:00:00
o3,c03,delivered,2017-01-28 22:15:00,2017-01-29 08:00:00
o4,c04,delivered,2018-03-02 12:00:00,2018-03-02 13:00:00
";

    /// Order payments extract.
    pub const PAYMENTS_CSV: &str = "\
order_id,payment_sequential,payment_type,payment_installments,payment_value
o1,1,credit_card,8,99.33
o2,1,boleto,1,24.39
o3,1,credit_card,1,65.71
o3,2,voucher,1,10.00
o4,1,credit_card,2,107.78
o4,2,debit_card,1,12.00
";
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_csv(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write CSV fixture");
    path
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Property-based testing strategies.
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for short city-like names drawn from a small alphabet so that
    /// generated tables contain repeated keys.
    pub fn category_strategy() -> impl Strategy<Value = String> {
        "[abc]{1,2}"
    }

    /// Strategy for optional category cells, `None` standing for an empty cell.
    pub fn optional_category_strategy() -> impl Strategy<Value = Option<String>> {
        prop::option::weighted(0.85, category_strategy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_customers_in() {
        let rows = customers_in(&["A", "B"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].customer_id.as_deref(), Some("c1"));
        assert_eq!(rows[1].customer_city.as_deref(), Some("B"));
    }

    #[test]
    fn test_write_csv() {
        let dir = create_temp_dir();
        let path = write_csv(dir.path(), "customers.csv", fixtures::CUSTOMERS_CSV);
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("customer_id,"));
    }
}
