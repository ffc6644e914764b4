//! Kanaiyazhi magazine edition queries

use shared::models::KanaiyazhiEdition;
use store_client::{OrderBy, Query, StoreResult, TableStore, TableStoreExt};

/// Every edition, newest year then highest edition number first
pub async fn editions(store: &dyn TableStore) -> StoreResult<Vec<KanaiyazhiEdition>> {
    let query = Query::of::<KanaiyazhiEdition>()
        .order("year", OrderBy::desc())
        .order("edition_number", OrderBy::desc());
    store.fetch(&query).await
}

/// The featured edition, if one is flagged
pub async fn featured(store: &dyn TableStore) -> StoreResult<Option<KanaiyazhiEdition>> {
    let query = Query::of::<KanaiyazhiEdition>().eq("is_featured", true);
    store.fetch_optional(&query).await
}

pub async fn by_year(store: &dyn TableStore, year: i32) -> StoreResult<Vec<KanaiyazhiEdition>> {
    let query = Query::of::<KanaiyazhiEdition>()
        .eq("year", year)
        .order("edition_number", OrderBy::desc());
    store.fetch(&query).await
}
