//! Order Item Model

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Portion size of an ordered dish
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemQuantity {
    S,
    #[default]
    M,
    L,
}

/// Order item entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    pub order_item_id: String,
    pub quantity: ItemQuantity,
    pub unit_price: f64,
    pub food_id: String,
    pub order_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// One line of an [`OrderItemPack`]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemCreate {
    pub quantity: ItemQuantity,
    #[validate(range(min = 0.0, max = 1_000_000.0))]
    pub unit_price: f64,
    #[validate(length(min = 1))]
    pub food_id: String,
}

/// Create order items payload
///
/// Items are attached to `order_id` when given; otherwise a new order is
/// opened for `table_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_pack_target"))]
pub struct OrderItemPack {
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[validate(length(min = 1), nested)]
    pub order_items: Vec<OrderItemCreate>,
}

/// Update order item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<ItemQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 1_000_000.0))]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub food_id: Option<String>,
}

fn validate_pack_target(pack: &OrderItemPack) -> Result<(), ValidationError> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    if present(&pack.order_id) || present(&pack.table_id) {
        return Ok(());
    }
    let mut err = ValidationError::new("order_target");
    err.message = Some("either order_id or table_id is required".into());
    Err(err)
}
