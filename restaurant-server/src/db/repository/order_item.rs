//! Order Item Repository

use super::{RepoError, RepoResult, apply_update};
use crate::db::collections::{FOOD, ORDER_ITEM};
use crate::db::repository::OrderRepository;
use crate::db::{Collection, DbService};
use crate::money::round_money;
use crate::utils::PaginationParams;
use shared::models::{OrderCreate, OrderItem, OrderItemPack, OrderItemUpdate};
use shared::util::{new_public_id, now_millis};
use std::collections::HashSet;

#[derive(Clone)]
pub struct OrderItemRepository {
    items: Collection,
    foods: Collection,
    orders: OrderRepository,
}

impl OrderItemRepository {
    pub fn new(db: &DbService) -> Self {
        Self {
            items: db.collection(ORDER_ITEM),
            foods: db.collection(FOOD),
            orders: OrderRepository::new(db),
        }
    }

    pub async fn find_all(&self, page: Option<&PaginationParams>) -> RepoResult<Vec<OrderItem>> {
        self.items.find_all(page).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderItem>> {
        self.items.find_by_key(id).await
    }

    pub async fn find_by_order(&self, order_id: &str) -> RepoResult<Vec<OrderItem>> {
        self.items.find_where("order_id", order_id).await
    }

    async fn require_food(&self, food_id: &str) -> RepoResult<()> {
        if self.foods.exists(food_id).await? {
            Ok(())
        } else {
            Err(RepoError::Reference("food"))
        }
    }

    /// Insert a pack of items.
    ///
    /// Foods are resolved and prices rounded before anything is written.
    /// The items then go to `order_id` when given, otherwise to a new order
    /// opened at `table_id`.
    /// Opening the order and inserting the items are separate writes.
    pub async fn create_pack(&self, pack: OrderItemPack) -> RepoResult<Vec<OrderItem>> {
        let mut checked = HashSet::new();
        for item in &pack.order_items {
            if checked.insert(item.food_id.as_str()) {
                self.require_food(&item.food_id).await?;
            }
        }
        let prices = pack
            .order_items
            .iter()
            .map(|item| round_money(item.unit_price))
            .collect::<Result<Vec<_>, _>>()?;

        let order_id = match (pack.order_id, pack.table_id) {
            (Some(order_id), _) if !order_id.trim().is_empty() => {
                if !self.orders.exists(&order_id).await? {
                    return Err(RepoError::Reference("order"));
                }
                order_id
            }
            (_, Some(table_id)) => {
                self.orders
                    .create(OrderCreate {
                        order_date: None,
                        table_id,
                    })
                    .await?
                    .order_id
            }
            _ => {
                return Err(RepoError::Validation(
                    "either order_id or table_id is required".to_string(),
                ));
            }
        };

        let now = now_millis();
        let docs = pack
            .order_items
            .into_iter()
            .zip(prices)
            .map(|(item, unit_price)| {
                let order_item = OrderItem {
                    order_item_id: new_public_id(),
                    quantity: item.quantity,
                    unit_price,
                    food_id: item.food_id,
                    order_id: order_id.clone(),
                    created_at: now,
                    updated_at: now,
                };
                (order_item.order_item_id.clone(), order_item)
            })
            .collect();

        let created = self.items.insert_many(docs).await?;
        tracing::info!(order_id = %order_id, count = created.len(), "Order items created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, mut data: OrderItemUpdate) -> RepoResult<OrderItem> {
        if let Some(food_id) = &data.food_id {
            self.require_food(food_id).await?;
        }
        data.unit_price = data.unit_price.map(round_money).transpose()?;
        apply_update(&self.items, "order_item_id", id, &data).await
    }
}
