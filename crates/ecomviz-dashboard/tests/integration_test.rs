//! Integration tests for ecomviz-dashboard crate.
//!
//! These tests run the dashboard end to end over CSV fixtures in a
//! temporary directory.

use ecomviz_common::test_utils::{create_temp_dir, fixtures, init_test_logging, write_csv};
use ecomviz_config::Config;
use ecomviz_dashboard::{Dashboard, SECTION_TITLES};
use std::path::Path;

fn fixture_config(dir: &Path, orders_csv: &str) -> Config {
    let mut config = Config::default();
    config.inputs.customers = write_csv(dir, "customers_corrected.csv", fixtures::CUSTOMERS_CSV);
    config.inputs.orders = write_csv(dir, "orders_corrected.csv", orders_csv);
    config.inputs.payments = write_csv(dir, "order_payments_corrected.csv", fixtures::PAYMENTS_CSV);
    config.output.path = dir.join("out").join("dashboard.html");
    config
}

#[tokio::test]
async fn test_end_to_end_page() {
    init_test_logging();
    let dir = create_temp_dir();
    let dashboard = Dashboard::new(fixture_config(dir.path(), fixtures::ORDERS_CSV));

    let path = dashboard.run().await.unwrap();
    let html = std::fs::read_to_string(&path).unwrap();

    assert!(html.contains("<h1>E-Commerce Public Analysis</h1>"));
    let positions: Vec<usize> = SECTION_TITLES
        .iter()
        .map(|title| html.find(title).unwrap_or_else(|| panic!("missing section {title}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(html.matches("<svg").count(), 3);
    assert!(html.contains("Top 5 Cities with Most Customers"));
    assert!(html.contains("Top 5 Payment Types Most Used"));
    for month in ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"] {
        assert!(html.contains(month), "missing month label {month}");
    }
}

#[tokio::test]
async fn test_bad_timestamp_writes_nothing() {
    init_test_logging();
    let dir = create_temp_dir();
    let orders = "order_id,order_status,order_purchase_timestamp\no1,delivered,yesterday\n";
    let config = fixture_config(dir.path(), orders);
    let output = config.output.path.clone();

    let err = Dashboard::new(config).run().await.unwrap_err();
    assert!(err.is_input_schema());
    assert!(err.to_string().contains("yesterday"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_bad_timestamp_on_undelivered_order_is_ignored() {
    let dir = create_temp_dir();
    let orders = "order_id,order_status,order_purchase_timestamp\n\
                  o1,delivered,2017-05-01 10:00:00\n\
                  o2,canceled,yesterday\n";
    let dashboard = Dashboard::new(fixture_config(dir.path(), orders));

    let html = dashboard.build_page().await.unwrap();
    assert!(html.contains("2017"));
}

#[tokio::test]
async fn test_missing_input_file_fails() {
    let dir = create_temp_dir();
    let mut config = fixture_config(dir.path(), fixtures::ORDERS_CSV);
    config.inputs.payments = dir.path().join("missing.csv");
    let output = config.output.path.clone();

    assert!(Dashboard::new(config).run().await.is_err());
    assert!(!output.exists());
}
