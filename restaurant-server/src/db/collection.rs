//! Collection handle
//!
//! Typed document operations over one SurrealDB table. Records are keyed by
//! their public id, so `<table>:<uuid>` is the record id and the same uuid
//! is stored in the `<entity>_id` field.
//!
//! Every operation is bounded by the configured timeout; an elapsed timeout
//! drops the in-flight future and yields [`RepoError::Timeout`]. Nothing is
//! retried.

use super::repository::{RepoError, RepoResult};
use crate::utils::PaginationParams;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::future::IntoFuture;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

#[derive(Clone)]
pub struct Collection {
    db: Surreal<Any>,
    name: &'static str,
    timeout: Duration,
}

impl Collection {
    pub(super) fn new(db: Surreal<Any>, name: &'static str, timeout: Duration) -> Self {
        Self { db, name, timeout }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    async fn bounded<F, T>(&self, op: &'static str, fut: F) -> RepoResult<T>
    where
        F: IntoFuture<Output = Result<T, surrealdb::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(RepoError::from),
            Err(_) => {
                tracing::error!(collection = self.name, op, timeout = ?self.timeout, "Store operation timed out");
                Err(RepoError::Timeout(format!(
                    "{}.{} exceeded {}ms",
                    self.name,
                    op,
                    self.timeout.as_millis()
                )))
            }
        }
    }

    /// All records, oldest first, optionally paged
    pub async fn find_all<T>(&self, page: Option<&PaginationParams>) -> RepoResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let query = match page {
            Some(page) => self
                .db
                .query("SELECT * FROM type::table($tb) ORDER BY created_at ASC LIMIT $limit START $start")
                .bind(("tb", self.name))
                .bind(("limit", page.limit()))
                .bind(("start", page.offset())),
            None => self
                .db
                .query("SELECT * FROM type::table($tb) ORDER BY created_at ASC")
                .bind(("tb", self.name)),
        };
        let mut response = self.bounded("find_all", query).await?;
        Ok(response.take(0)?)
    }

    pub async fn find_by_key<T>(&self, key: &str) -> RepoResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.bounded("find_by_key", self.db.select((self.name, key.to_string())))
            .await
    }

    pub async fn exists(&self, key: &str) -> RepoResult<bool> {
        let found: Option<IgnoredAny> = self.find_by_key(key).await?;
        Ok(found.is_some())
    }

    /// Records whose `field` equals `value`, oldest first.
    ///
    /// `field` is always a compile-time column name, never user input.
    pub async fn find_where<T>(&self, field: &'static str, value: &str) -> RepoResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let sql = format!("SELECT * FROM type::table($tb) WHERE {field} = $value ORDER BY created_at ASC");
        let query = self
            .db
            .query(sql)
            .bind(("tb", self.name))
            .bind(("value", value.to_string()));
        let mut response = self.bounded("find_where", query).await?;
        Ok(response.take(0)?)
    }

    pub async fn find_one_where<T>(&self, field: &'static str, value: &str) -> RepoResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let mut found: Vec<T> = self.find_where(field, value).await?;
        Ok(if found.is_empty() {
            None
        } else {
            Some(found.swap_remove(0))
        })
    }

    /// Records whose `field` is one of `values`
    pub async fn find_in<T>(&self, field: &'static str, values: Vec<String>) -> RepoResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        if values.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!("SELECT * FROM type::table($tb) WHERE {field} INSIDE $values");
        let query = self
            .db
            .query(sql)
            .bind(("tb", self.name))
            .bind(("values", values));
        let mut response = self.bounded("find_in", query).await?;
        Ok(response.take(0)?)
    }

    /// Create a record under `key`; fails if the key is taken
    pub async fn insert<T>(&self, key: &str, doc: T) -> RepoResult<T>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        let created: Option<T> = self
            .bounded(
                "insert",
                self.db.create((self.name, key.to_string())).content(doc),
            )
            .await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create {}:{}", self.name, key)))
    }

    /// Insert each `(key, doc)` in order. Not atomic: a failure leaves the
    /// earlier documents in place.
    pub async fn insert_many<T>(&self, docs: Vec<(String, T)>) -> RepoResult<Vec<T>>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        let mut created = Vec::with_capacity(docs.len());
        for (key, doc) in docs {
            created.push(self.insert(&key, doc).await?);
        }
        Ok(created)
    }

    /// Merge `patch` onto the record at `key`, creating it when absent,
    /// and return the stored record
    pub async fn merge_upsert<P, T>(&self, key: &str, patch: P) -> RepoResult<T>
    where
        P: Serialize + 'static,
        T: DeserializeOwned,
    {
        let stored: Option<T> = self
            .bounded(
                "merge_upsert",
                self.db.upsert((self.name, key.to_string())).merge(patch),
            )
            .await?;
        stored.ok_or_else(|| RepoError::Database(format!("Failed to upsert {}:{}", self.name, key)))
    }
}
