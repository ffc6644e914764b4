//! Achievement queries, newest year first

use shared::models::Achievement;
use store_client::{OrderBy, Query, StoreResult, TableStore, TableStoreExt};

pub async fn all(store: &dyn TableStore) -> StoreResult<Vec<Achievement>> {
    let query = Query::of::<Achievement>().order("year", OrderBy::desc());
    store.fetch(&query).await
}

pub async fn by_category(
    store: &dyn TableStore,
    category: &str,
) -> StoreResult<Vec<Achievement>> {
    let query = Query::of::<Achievement>()
        .eq("category", category)
        .order("year", OrderBy::desc());
    store.fetch(&query).await
}
