//! Input records read from the e-commerce extracts.
//!
//! Only the columns the dashboard uses are modelled; any other column in the
//! source files is ignored on load. Empty cells deserialize to `None`.

use serde::{Deserialize, Serialize};

/// Order status value that marks an order as delivered.
pub const DELIVERED_STATUS: &str = "delivered";

/// A customer row from the customers extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Customer identifier.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// City the customer lives in.
    pub customer_city: Option<String>,
}

/// An order row from the orders extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order identifier. Several rows may share one id.
    pub order_id: Option<String>,
    /// Lifecycle status, e.g. `delivered`, `shipped`, `canceled`.
    pub order_status: Option<String>,
    /// Purchase date-time as written in the source file.
    pub order_purchase_timestamp: Option<String>,
}

impl OrderRecord {
    /// Whether the order status is exactly `delivered` (case-sensitive).
    pub fn is_delivered(&self) -> bool {
        self.order_status.as_deref() == Some(DELIVERED_STATUS)
    }
}

/// A payment row from the order payments extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Order the payment belongs to.
    #[serde(default)]
    pub order_id: Option<String>,
    /// Payment method, e.g. `credit_card`, `boleto`.
    pub payment_type: Option<String>,
}

/// The three input tables of one dashboard run.
///
/// Loaded once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Customers extract.
    pub customers: Vec<CustomerRecord>,
    /// Orders extract.
    pub orders: Vec<OrderRecord>,
    /// Order payments extract.
    pub payments: Vec<PaymentRecord>,
}
