//! Database Module
//!
//! Owns the SurrealDB connection and hands out [`Collection`] handles.
//! The connection is created once in `ServerState::initialize` and shared
//! by every request; the SDK client is safe for concurrent use.

pub mod collection;
pub mod repository;

pub use collection::Collection;

use crate::core::config::DatabaseConfig;
use crate::utils::AppError;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

/// Collection names
pub mod collections {
    pub const USER: &str = "user";
    pub const TABLE: &str = "dining_table";
    pub const MENU: &str = "menu";
    pub const FOOD: &str = "food";
    pub const ORDER: &str = "order";
    pub const ORDER_ITEM: &str = "order_item";
    pub const INVOICE: &str = "invoice";
}

/// Database service, wraps one SurrealDB client
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
    op_timeout: Duration,
}

impl DbService {
    /// Connect, optionally sign in, and select namespace/database.
    ///
    /// `config.url` picks the engine: `mem://`, `rocksdb://path`, `ws://host:port`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let db = any::connect(config.url.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {}: {e}", config.url)))?;

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await
            .map_err(|e| AppError::database(format!("Database sign-in failed: {e}")))?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        tracing::info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Database connection established"
        );

        Ok(Self {
            db,
            op_timeout: config.op_timeout,
        })
    }

    /// Look up a collection by name; no I/O
    pub fn collection(&self, name: &'static str) -> Collection {
        Collection::new(self.db.clone(), name, self.op_timeout)
    }

    /// Round-trip to the datastore
    pub async fn ping(&self) -> bool {
        matches!(
            tokio::time::timeout(self.op_timeout, self.db.health()).await,
            Ok(Ok(()))
        )
    }
}
