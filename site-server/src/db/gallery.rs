//! Gallery image queries
//!
//! Curated order first (`display_order` ascending, unordered images last),
//! newest upload first within equal positions.

use shared::models::GalleryImage;
use store_client::{OrderBy, Query, StoreResult, TableStore, TableStoreExt};

fn ordered(query: Query) -> Query {
    query
        .order("display_order", OrderBy::asc().nulls_last())
        .order("created_at", OrderBy::desc())
}

/// Images flagged for the general gallery
pub async fn gallery_images(store: &dyn TableStore) -> StoreResult<Vec<GalleryImage>> {
    let query = ordered(Query::of::<GalleryImage>().eq("show_in_gallery", true));
    store.fetch(&query).await
}

/// Images flagged for the Pongal carousel
pub async fn pongal_images(store: &dyn TableStore) -> StoreResult<Vec<GalleryImage>> {
    let query = ordered(Query::of::<GalleryImage>().eq("pongal_images", true));
    store.fetch(&query).await
}

pub async fn by_category(
    store: &dyn TableStore,
    category: &str,
) -> StoreResult<Vec<GalleryImage>> {
    let query = ordered(Query::of::<GalleryImage>().eq("category", category));
    store.fetch(&query).await
}

pub async fn by_event(store: &dyn TableStore, event_id: &str) -> StoreResult<Vec<GalleryImage>> {
    let query = ordered(Query::of::<GalleryImage>().eq("event_id", event_id));
    store.fetch(&query).await
}
