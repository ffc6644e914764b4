//! Table store capability

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::query::Query;

/// Generic table access the site is built on
///
/// Rows travel as JSON objects; [`TableStoreExt`] adds typed helpers.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Rows matching the query, in query order
    async fn select(&self, query: &Query) -> StoreResult<Vec<Value>>;

    /// Number of rows matching the query's filters
    async fn count(&self, query: &Query) -> StoreResult<u64>;

    /// Insert one row
    async fn insert(&self, table: &str, row: Value) -> StoreResult<()>;

    /// Insert one row and return it as stored (with defaults applied)
    async fn insert_returning(&self, table: &str, row: Value) -> StoreResult<Value>;

    /// Insert or merge on the primary key `id`
    async fn upsert(&self, table: &str, row: Value) -> StoreResult<()>;

    /// Whether calls can succeed at all
    fn is_configured(&self) -> bool {
        true
    }
}

/// Typed helpers for every [`TableStore`]
#[async_trait]
pub trait TableStoreExt: TableStore {
    /// Select and decode rows
    ///
    /// Rows that do not decode as `T` are logged and skipped.
    async fn fetch<T>(&self, query: &Query) -> StoreResult<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let rows = self.select(query).await?;
        let decoded = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value(row) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(table = query.table_name(), error = %e, "Skipping undecodable row");
                    None
                }
            })
            .collect();
        Ok(decoded)
    }

    /// First matching row, if any
    async fn fetch_optional<T>(&self, query: &Query) -> StoreResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let query = query.clone().limit(1);
        let rows = self.select(&query).await?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(serde_json::from_value(row)?)),
            None => Ok(None),
        }
    }

    async fn count_rows(&self, query: &Query) -> StoreResult<u64> {
        self.count(query).await
    }

    /// Serialize and insert one row
    async fn insert_row<B>(&self, table: &str, row: &B) -> StoreResult<()>
    where
        B: Serialize + Sync,
    {
        let value = serde_json::to_value(row)?;
        self.insert(table, value).await
    }

    /// Serialize and upsert one row
    async fn upsert_row<B>(&self, table: &str, row: &B) -> StoreResult<()>
    where
        B: Serialize + Sync,
    {
        let value = serde_json::to_value(row)?;
        self.upsert(table, value).await
    }
}

impl<S: TableStore + ?Sized> TableStoreExt for S {}

/// Store used when credentials are missing
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredStore;

#[async_trait]
impl TableStore for UnconfiguredStore {
    async fn select(&self, _query: &Query) -> StoreResult<Vec<Value>> {
        Err(StoreError::NotConfigured)
    }

    async fn count(&self, _query: &Query) -> StoreResult<u64> {
        Err(StoreError::NotConfigured)
    }

    async fn insert(&self, _table: &str, _row: Value) -> StoreResult<()> {
        Err(StoreError::NotConfigured)
    }

    async fn insert_returning(&self, _table: &str, _row: Value) -> StoreResult<Value> {
        Err(StoreError::NotConfigured)
    }

    async fn upsert(&self, _table: &str, _row: Value) -> StoreResult<()> {
        Err(StoreError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_unconfigured_store_fails_everything() {
        let store: Arc<dyn TableStore> = Arc::new(UnconfiguredStore);
        assert!(!store.is_configured());
        let err = store.select(&Query::table("events")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotConfigured));
        let err = store
            .upsert("keepalive", serde_json::json!({"id": 1}))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotConfigured));
    }

    #[tokio::test]
    async fn test_typed_fetch_through_trait_object() {
        let store = crate::MemoryStore::new();
        store.seed_rows(
            "achievements",
            vec![serde_json::json!({"id": "a1", "title": "Best Cultural Club"})],
        );
        let store: Arc<dyn TableStore> = Arc::new(store);

        #[derive(serde::Deserialize)]
        struct Row {
            title: String,
        }

        let rows: Vec<Row> = store.fetch(&Query::table("achievements")).await.unwrap();
        assert_eq!(rows[0].title, "Best Cultural Club");

        let missing: Option<Row> = store
            .fetch_optional(&Query::table("achievements").eq("id", "nope"))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_fetch_skips_malformed_rows() {
        let store = crate::MemoryStore::new();
        store.seed_rows(
            "achievements",
            vec![
                serde_json::json!({"id": "a1", "year": 2024}),
                serde_json::json!({"id": "a2", "year": "last year"}),
                serde_json::json!({"id": "a3", "year": 2022}),
            ],
        );

        #[derive(Debug, serde::Deserialize)]
        struct Row {
            id: String,
            year: i32,
        }

        let rows: Vec<Row> = store.fetch(&Query::table("achievements")).await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a3"]);
        assert_eq!(rows[1].year, 2022);
    }
}
