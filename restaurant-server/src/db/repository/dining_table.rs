//! Dining Table Repository

use super::{RepoResult, apply_update};
use crate::db::collections::TABLE;
use crate::db::{Collection, DbService};
use crate::utils::PaginationParams;
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use shared::util::{new_public_id, now_millis};

#[derive(Clone)]
pub struct DiningTableRepository {
    tables: Collection,
}

impl DiningTableRepository {
    pub fn new(db: &DbService) -> Self {
        Self {
            tables: db.collection(TABLE),
        }
    }

    pub async fn find_all(&self, page: Option<&PaginationParams>) -> RepoResult<Vec<DiningTable>> {
        self.tables.find_all(page).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        self.tables.find_by_key(id).await
    }

    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        let now = now_millis();
        let table = DiningTable {
            table_id: new_public_id(),
            number_of_guests: data.number_of_guests,
            table_number: data.table_number,
            created_at: now,
            updated_at: now,
        };
        let key = table.table_id.clone();
        self.tables.insert(&key, table).await
    }

    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        apply_update(&self.tables, "table_id", id, &data).await
    }
}
