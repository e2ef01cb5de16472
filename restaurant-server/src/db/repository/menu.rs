//! Menu Repository

use super::{RepoError, RepoResult, apply_update};
use crate::db::collections::MENU;
use crate::db::{Collection, DbService};
use crate::utils::PaginationParams;
use shared::models::{Menu, MenuCreate, MenuUpdate};
use shared::util::{new_public_id, now_millis};

#[derive(Clone)]
pub struct MenuRepository {
    menus: Collection,
}

/// A replacement window must open in the future and close after it opens
pub fn in_time_span(start: i64, end: i64, now: i64) -> bool {
    start > now && end > start
}

impl MenuRepository {
    pub fn new(db: &DbService) -> Self {
        Self {
            menus: db.collection(MENU),
        }
    }

    pub async fn find_all(&self, page: Option<&PaginationParams>) -> RepoResult<Vec<Menu>> {
        self.menus.find_all(page).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Menu>> {
        self.menus.find_by_key(id).await
    }

    pub async fn create(&self, data: MenuCreate) -> RepoResult<Menu> {
        let now = now_millis();
        let menu = Menu {
            menu_id: new_public_id(),
            name: data.name,
            category: data.category,
            start_date: data.start_date,
            end_date: data.end_date,
            created_at: now,
            updated_at: now,
        };
        let key = menu.menu_id.clone();
        self.menus.insert(&key, menu).await
    }

    /// Partial update. When both dates are supplied the new window is checked
    /// with [`in_time_span`].
    pub async fn update(&self, id: &str, data: MenuUpdate) -> RepoResult<Menu> {
        if let (Some(start), Some(end)) = (data.start_date, data.end_date)
            && !in_time_span(start, end, now_millis())
        {
            return Err(RepoError::InvalidTimeWindow);
        }
        apply_update(&self.menus, "menu_id", id, &data).await
    }
}
