//! Billing summary types
//!
//! Produced by joining order items with their food, order and table.

use super::order_item::ItemQuantity;
use serde::{Deserialize, Serialize};

/// One order item flattened with the data joined onto it.
///
/// Join misses leave the corresponding fields `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingLine {
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub unit_price: f64,
    pub table_number: Option<i32>,
    pub table_id: Option<String>,
    pub order_id: String,
    pub quantity: ItemQuantity,
}

/// Items of one `(order_id, table_id, table_number)` group with their totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBilling {
    pub payment_due: f64,
    pub total_count: usize,
    pub table_number: Option<i32>,
    pub order_items: Vec<BillingLine>,
}
