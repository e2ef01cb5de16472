//! Repository Module
//!
//! One repository per entity. Repositories own the write rules: reference
//! checks, id and timestamp stamping, money rounding, and partial merges.

pub mod dining_table;
pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;
pub mod user;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use food::FoodRepository;
pub use invoice::InvoiceRepository;
pub use menu::MenuRepository;
pub use order::OrderRepository;
pub use order_item::OrderItemRepository;
pub use user::UserRepository;

use super::Collection;
use crate::billing::BillingError;
use crate::money::MoneyError;
use crate::utils::{AppError, ErrorCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::util::now_millis;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A referenced record (menu, table, order, food) does not exist
    #[error("{0} not found")]
    Reference(&'static str),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("kindly retype the time")]
    InvalidTimeWindow,

    #[error("Order {0} has no items")]
    NoItemsForOrder(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Timeout: {0}")]
    Timeout(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<BillingError> for RepoError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::NoItemsForOrder(order_id) => RepoError::NoItemsForOrder(order_id),
            BillingError::Money(e) => RepoError::Internal(e.to_string()),
        }
    }
}

/// Amounts rejected while rounding an incoming price
impl From<MoneyError> for RepoError {
    fn from(err: MoneyError) -> Self {
        RepoError::Validation(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Reference(resource) => AppError::reference(resource),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::InvalidTimeWindow => AppError::new(ErrorCode::InvalidTimeWindow),
            RepoError::NoItemsForOrder(order_id) => {
                AppError::new(ErrorCode::NoItemsForOrder).with_detail("order_id", order_id)
            }
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Internal(msg) => AppError::internal(msg),
            RepoError::Timeout(msg) => AppError::timeout(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Stamps {
    updated_at: i64,
}

/// Merge the present fields of `changes` onto the record at `key`.
///
/// `updated_at` always advances past its previous value. When no record
/// exists one is created from the patch, stamped with `created_at` and
/// `<id_field> = key`.
pub(crate) async fn apply_update<U, T>(
    collection: &Collection,
    id_field: &'static str,
    key: &str,
    changes: &U,
) -> RepoResult<T>
where
    U: Serialize,
    T: DeserializeOwned,
{
    let mut patch = match serde_json::to_value(changes) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) => Map::new(),
        Ok(other) => {
            return Err(RepoError::Validation(format!(
                "update payload must be an object, got {other}"
            )));
        }
        Err(e) => return Err(RepoError::Validation(e.to_string())),
    };

    let now = now_millis();
    let previous: Option<Stamps> = collection.find_by_key(key).await?;
    match previous {
        Some(stamps) => {
            patch.insert("updated_at".into(), now.max(stamps.updated_at + 1).into());
        }
        None => {
            tracing::info!(collection = collection.name(), key, "Update target missing, creating it");
            patch.insert("updated_at".into(), now.into());
            patch.insert("created_at".into(), now.into());
            patch.insert(id_field.into(), key.into());
        }
    }

    collection.merge_upsert(key, Value::Object(patch)).await
}
