//! Order Repository

use super::{RepoError, RepoResult, apply_update};
use crate::db::collections::{ORDER, TABLE};
use crate::db::{Collection, DbService};
use crate::utils::PaginationParams;
use shared::models::{Order, OrderCreate, OrderUpdate};
use shared::util::{new_public_id, now_millis};

#[derive(Clone)]
pub struct OrderRepository {
    orders: Collection,
    tables: Collection,
}

impl OrderRepository {
    pub fn new(db: &DbService) -> Self {
        Self {
            orders: db.collection(ORDER),
            tables: db.collection(TABLE),
        }
    }

    pub async fn find_all(&self, page: Option<&PaginationParams>) -> RepoResult<Vec<Order>> {
        self.orders.find_all(page).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        self.orders.find_by_key(id).await
    }

    pub async fn exists(&self, id: &str) -> RepoResult<bool> {
        self.orders.exists(id).await
    }

    async fn require_table(&self, table_id: &str) -> RepoResult<()> {
        if self.tables.exists(table_id).await? {
            Ok(())
        } else {
            Err(RepoError::Reference("table"))
        }
    }

    /// Open an order at an existing table. `order_date` defaults to now.
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        self.require_table(&data.table_id).await?;

        let now = now_millis();
        let order = Order {
            order_id: new_public_id(),
            order_date: data.order_date.unwrap_or(now),
            table_id: data.table_id,
            created_at: now,
            updated_at: now,
        };
        let key = order.order_id.clone();
        let created = self.orders.insert(&key, order).await?;
        tracing::info!(order_id = %created.order_id, table_id = %created.table_id, "Order opened");
        Ok(created)
    }

    pub async fn update(&self, id: &str, data: OrderUpdate) -> RepoResult<Order> {
        if let Some(table_id) = &data.table_id {
            self.require_table(table_id).await?;
        }
        apply_update(&self.orders, "order_id", id, &data).await
    }
}
