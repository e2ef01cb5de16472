//! Food Repository

use super::{RepoError, RepoResult, apply_update};
use crate::db::collections::{FOOD, MENU};
use crate::db::{Collection, DbService};
use crate::money::round_money;
use crate::utils::PaginationParams;
use shared::models::{Food, FoodCreate, FoodUpdate};
use shared::util::{new_public_id, now_millis};

#[derive(Clone)]
pub struct FoodRepository {
    foods: Collection,
    menus: Collection,
}

impl FoodRepository {
    pub fn new(db: &DbService) -> Self {
        Self {
            foods: db.collection(FOOD),
            menus: db.collection(MENU),
        }
    }

    pub async fn find_all(&self, page: Option<&PaginationParams>) -> RepoResult<Vec<Food>> {
        self.foods.find_all(page).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Food>> {
        self.foods.find_by_key(id).await
    }

    pub async fn find_by_ids(&self, ids: Vec<String>) -> RepoResult<Vec<Food>> {
        self.foods.find_in("food_id", ids).await
    }

    async fn require_menu(&self, menu_id: &str) -> RepoResult<()> {
        if self.menus.exists(menu_id).await? {
            Ok(())
        } else {
            Err(RepoError::Reference("menu"))
        }
    }

    /// Create a food under an existing menu; the price is rounded to cents
    pub async fn create(&self, data: FoodCreate) -> RepoResult<Food> {
        self.require_menu(&data.menu_id).await?;

        let now = now_millis();
        let food = Food {
            food_id: new_public_id(),
            name: data.name,
            price: round_money(data.price)?,
            food_image: data.food_image,
            menu_id: data.menu_id,
            created_at: now,
            updated_at: now,
        };
        let key = food.food_id.clone();
        self.foods.insert(&key, food).await
    }

    pub async fn update(&self, id: &str, mut data: FoodUpdate) -> RepoResult<Food> {
        if let Some(menu_id) = &data.menu_id {
            self.require_menu(menu_id).await?;
        }
        data.price = data.price.map(round_money).transpose()?;
        apply_update(&self.foods, "food_id", id, &data).await
    }
}
