//! Integration tests for ecomviz-common crate.

use chrono::Datelike;
use ecomviz_common::{
    month_abbr, parse_purchase_timestamp, truncate_string, CustomerRecord, EcomError,
    OrderRecord, PaymentRecord, MONTH_ABBREVIATIONS,
};

#[test]
fn test_month_abbreviations_cover_the_year() {
    assert_eq!(MONTH_ABBREVIATIONS.len(), 12);
    for (i, abbr) in MONTH_ABBREVIATIONS.iter().enumerate() {
        assert_eq!(month_abbr(i as u32 + 1), Some(*abbr));
    }
}

#[test]
fn test_truncate_string() {
    assert_eq!(truncate_string("rio de janeiro", 20), "rio de janeiro");
    assert_eq!(
        truncate_string("santa rita do passa quatro", 20),
        "santa rita do pas..."
    );
}

#[test]
fn test_dataset_timestamp_parses() {
    let dt = parse_purchase_timestamp("2016-09-04 21:15:19").unwrap();
    assert_eq!((dt.year(), dt.month()), (2016, 9));
}

#[test]
fn test_records_deserialize_from_csv() {
    let orders = "order_id,order_status,order_purchase_timestamp\no1,delivered,2017-01-05 10:00:00\n";
    let payments = "order_id,payment_type\no1,credit_card\n";
    let customers = "customer_id,customer_city\nc1,franca\n";

    let order: OrderRecord = csv::Reader::from_reader(orders.as_bytes())
        .deserialize()
        .next()
        .unwrap()
        .unwrap();
    let payment: PaymentRecord = csv::Reader::from_reader(payments.as_bytes())
        .deserialize()
        .next()
        .unwrap()
        .unwrap();
    let customer: CustomerRecord = csv::Reader::from_reader(customers.as_bytes())
        .deserialize()
        .next()
        .unwrap()
        .unwrap();

    assert!(order.is_delivered());
    assert_eq!(payment.payment_type.as_deref(), Some("credit_card"));
    assert_eq!(customer.customer_city.as_deref(), Some("franca"));
}

#[test]
fn test_input_schema_error_is_fatal_kind() {
    let err = EcomError::input_schema_at("missing column 'payment_type'", "payments.csv", None);
    assert!(err.is_input_schema());
    assert_eq!(
        err.to_string(),
        "Input schema error in payments.csv: missing column 'payment_type'"
    );
}
