use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{
    DiningTableRepository, FoodRepository, InvoiceRepository, MenuRepository,
    OrderItemRepository, OrderRepository, UserRepository,
};
use crate::utils::AppError;

/// Shared server state
///
/// Cloned into every request. Holds no locks; the datastore client and the
/// token service are both safe for concurrent use.
///
/// | Field | Type | Notes |
/// |-------|------|-------|
/// | config | Config | immutable |
/// | db | DbService | datastore connection |
/// | jwt_service | Arc<JwtService> | token issuing and validation |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, db: DbService, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Connect to the datastore and build the token service.
    ///
    /// A connection failure is returned to the caller; nothing here exits.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::connect(&config.database).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Ok(Self::new(config.clone(), db, jwt_service))
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(&self.db)
    }

    pub fn tables(&self) -> DiningTableRepository {
        DiningTableRepository::new(&self.db)
    }

    pub fn menus(&self) -> MenuRepository {
        MenuRepository::new(&self.db)
    }

    pub fn foods(&self) -> FoodRepository {
        FoodRepository::new(&self.db)
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(&self.db)
    }

    pub fn order_items(&self) -> OrderItemRepository {
        OrderItemRepository::new(&self.db)
    }

    pub fn invoices(&self) -> InvoiceRepository {
        InvoiceRepository::new(&self.db)
    }
}
