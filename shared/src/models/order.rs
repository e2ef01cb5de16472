//! Order Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order entity, placed at a dining table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub order_id: String,
    pub order_date: i64,
    pub table_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    /// Defaults to the creation time
    #[serde(default)]
    pub order_date: Option<i64>,
    #[validate(length(min = 1))]
    pub table_id: String,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub table_id: Option<String>,
}
