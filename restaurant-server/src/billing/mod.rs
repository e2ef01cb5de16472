//! Order billing
//!
//! Joins the items of one order with their food, order and table records
//! and folds them into per-order totals. The pipeline is a fixed sequence:
//!
//! 1. filter items by `order_id`
//! 2. left-join food on `food_id`
//! 3. left-join order on `order_id` (for `table_id`)
//! 4. left-join table on `table_id` (for `table_number`)
//! 5. project a [`BillingLine`] per item
//! 6. group by `(order_id, table_id, table_number)`, summing `unit_price`
//!    and counting items
//! 7. emit one [`OrderBilling`] per group
//!
//! Missing joins never fail; they leave the projected fields `None`.

use crate::db::DbService;
use crate::db::repository::{
    DiningTableRepository, FoodRepository, OrderItemRepository, OrderRepository, RepoError,
    RepoResult,
};
use crate::money::{MoneyError, sum_money};
use shared::models::{BillingLine, DiningTable, Food, Order, OrderBilling, OrderItem};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BillingError {
    #[error("order {0} has no items")]
    NoItemsForOrder(String),

    #[error("cannot total order: {0}")]
    Money(#[from] MoneyError),
}

type GroupKey = (String, Option<String>, Option<i32>);

/// Run the billing pipeline over already-fetched records.
///
/// Fails only when a group's total cannot be represented.
pub fn aggregate(
    order_id: &str,
    items: &[OrderItem],
    foods: &HashMap<String, Food>,
    orders: &HashMap<String, Order>,
    tables: &HashMap<String, DiningTable>,
) -> Result<Vec<OrderBilling>, BillingError> {
    let lines = items
        .iter()
        .filter(|item| item.order_id == order_id)
        .map(|item| {
            let food = foods.get(&item.food_id);
            let order = orders.get(&item.order_id);
            let table = order.and_then(|o| tables.get(&o.table_id));
            BillingLine {
                food_name: food.map(|f| f.name.clone()),
                food_image: food.map(|f| f.food_image.clone()),
                unit_price: item.unit_price,
                table_number: table.map(|t| t.table_number),
                table_id: order.map(|o| o.table_id.clone()),
                order_id: item.order_id.clone(),
                quantity: item.quantity,
            }
        });

    let mut groups: Vec<(GroupKey, Vec<BillingLine>)> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    for line in lines {
        let key = (line.order_id.clone(), line.table_id.clone(), line.table_number);
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(line),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![line]));
            }
        }
    }

    groups
        .into_iter()
        .map(|((_, _, table_number), order_items)| -> Result<OrderBilling, BillingError> {
            Ok(OrderBilling {
                payment_due: sum_money(order_items.iter().map(|l| l.unit_price))?,
                total_count: order_items.len(),
                table_number,
                order_items,
            })
        })
        .collect()
}

/// First billing group, or `NoItemsForOrder` when the order has no items
pub fn first_billing(
    order_id: &str,
    billings: Vec<OrderBilling>,
) -> Result<OrderBilling, BillingError> {
    billings
        .into_iter()
        .next()
        .ok_or_else(|| BillingError::NoItemsForOrder(order_id.to_string()))
}

/// Fetch everything the pipeline needs for `order_id` and run it
pub async fn compute_order_billing(db: &DbService, order_id: &str) -> RepoResult<Vec<OrderBilling>> {
    let items = OrderItemRepository::new(db).find_by_order(order_id).await?;
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let mut food_ids: Vec<String> = items.iter().map(|i| i.food_id.clone()).collect();
    food_ids.sort();
    food_ids.dedup();
    let foods: HashMap<String, Food> = FoodRepository::new(db)
        .find_by_ids(food_ids)
        .await?
        .into_iter()
        .map(|f| (f.food_id.clone(), f))
        .collect();

    let mut orders = HashMap::new();
    let mut tables = HashMap::new();
    if let Some(order) = OrderRepository::new(db).find_by_id(order_id).await? {
        if let Some(table) = DiningTableRepository::new(db)
            .find_by_id(&order.table_id)
            .await?
        {
            tables.insert(table.table_id.clone(), table);
        }
        orders.insert(order.order_id.clone(), order);
    }

    aggregate(order_id, &items, &foods, &orders, &tables).map_err(RepoError::from)
}
